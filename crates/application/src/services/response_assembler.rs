use crate::ports::{ResponseMessage, ZoneSigner};
use crate::services::{RecordCodec, RecordTypeMapper};
use ferrous_root_domain::{DomainError, RecordType};
use hickory_proto::rr::{Record, RecordType as HickoryRecordType};
use std::sync::Arc;

/// Turns a backend payload into answer and authority sections.
pub struct ResponseAssembler {
    signer: Arc<dyn ZoneSigner>,
}

impl ResponseAssembler {
    pub fn new(signer: Arc<dyn ZoneSigner>) -> Self {
        Self { signer }
    }

    pub fn assemble(
        &self,
        payload: &[u8],
        queried: RecordType,
    ) -> Result<ResponseMessage, DomainError> {
        let records = RecordCodec::decode(payload)?;
        Ok(self.partition(records, queried))
    }

    /// NS always goes to authority, even when NS was asked for. The queried
    /// type and CNAME go to answer; everything else rides in authority.
    pub fn partition(&self, records: Vec<Record>, queried: RecordType) -> ResponseMessage {
        let queried_type = RecordTypeMapper::to_hickory(queried);
        let mut answer = Vec::new();
        let mut authority = Vec::new();

        for record in records {
            let rtype = record.record_type();
            if rtype == HickoryRecordType::NS {
                authority.push(record);
            } else if rtype == queried_type || rtype == HickoryRecordType::CNAME {
                answer.push(record);
            } else {
                authority.push(record);
            }
        }

        let referral = answer.is_empty() && !authority.is_empty();
        if referral {
            self.signer.sign_rrset(&mut authority, RecordType::DS);
        }

        self.signer.sign_rrset(&mut answer, queried);
        if queried != RecordType::CNAME {
            self.signer.sign_rrset(&mut answer, RecordType::CNAME);
        }

        ResponseMessage::new(answer, authority, !referral)
    }
}
