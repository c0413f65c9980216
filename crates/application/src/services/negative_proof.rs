use crate::ports::{ResponseMessage, ZoneSigner};
use crate::services::RecordTypeMapper;
use ferrous_root_domain::{
    denial_type_bitmap, DnsQuery, DomainError, RecordType, EMPTY_NON_TERMINAL_TYPES,
};
use hickory_proto::dnssec::rdata::{DNSSECRData, NSEC};
use hickory_proto::rr::{Name, RData, Record};
use std::sync::Arc;
use tracing::warn;

const DEFAULT_NSEC_TTL: u32 = 86_400;

/// Builds the NSEC + SOA denial used to ask resolvers for the full name and
/// to answer conservatively when the backend has nothing.
pub struct NegativeProofSynthesizer {
    signer: Arc<dyn ZoneSigner>,
    nsec_ttl: u32,
}

impl NegativeProofSynthesizer {
    pub fn new(signer: Arc<dyn ZoneSigner>) -> Self {
        Self {
            signer,
            nsec_ttl: DEFAULT_NSEC_TTL,
        }
    }

    pub fn with_nsec_ttl(mut self, nsec_ttl: u32) -> Self {
        self.nsec_ttl = nsec_ttl;
        self
    }

    /// The bare apex is an empty non-terminal: it exists, but nothing is
    /// answerable there. Any deeper name denies exactly the queried type.
    pub fn nsec_type_bitmap(name: &str, tld: &str, queried: RecordType) -> Vec<RecordType> {
        if name == tld {
            EMPTY_NON_TERMINAL_TYPES.to_vec()
        } else {
            denial_type_bitmap(queried)
        }
    }

    pub fn denial(&self, query: &DnsQuery) -> ResponseMessage {
        let mut authority = Vec::with_capacity(4);

        match self.nsec_record(query) {
            Ok(nsec) => {
                authority.push(nsec);
                self.signer.sign_rrset(&mut authority, RecordType::NSEC);
            }
            Err(e) => {
                warn!(name = %query.name, error = %e, "Cannot build NSEC, denying with SOA only");
            }
        }

        authority.push(self.signer.soa());
        self.signer.sign_rrset(&mut authority, RecordType::SOA);

        ResponseMessage::new(Vec::new(), authority, true)
    }

    fn nsec_record(&self, query: &DnsQuery) -> Result<Record, DomainError> {
        let owner = to_fqdn(&query.name)?;
        let next = Name::from_ascii(format!("\\000.{}", owner))
            .map_err(|e| DomainError::InvalidDomainName(e.to_string()))?;

        let types = Self::nsec_type_bitmap(&query.name, &query.tld, query.record_type)
            .into_iter()
            .map(RecordTypeMapper::to_hickory)
            .collect::<Vec<_>>();

        Ok(Record::from_rdata(
            owner,
            self.nsec_ttl,
            RData::DNSSEC(DNSSECRData::NSEC(NSEC::new(next, types))),
        ))
    }
}

fn to_fqdn(name: &str) -> Result<Name, DomainError> {
    if name.is_empty() {
        return Ok(Name::root());
    }
    Name::from_ascii(format!("{}.", name))
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))
}
