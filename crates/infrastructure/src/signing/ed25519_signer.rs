use chrono::{DateTime, Datelike, Timelike, Utc};
use ferrous_root_application::ports::ZoneSigner;
use ferrous_root_application::services::RecordTypeMapper;
use ferrous_root_domain::config::ZoneConfig;
use ferrous_root_domain::{DomainError, RecordType};
use hickory_proto::dnssec::crypto::Ed25519SigningKey;
use hickory_proto::dnssec::rdata::{DNSSECRData, DNSKEY, RRSIG};
use hickory_proto::dnssec::{Algorithm, PublicKey, PublicKeyBuf, SigSigner, SigningKey};
use hickory_proto::rr::rdata::SOA;
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordSet};
use rustls::pki_types::PrivatePkcs8KeyDer;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{info, warn};

const ZONE_KEY_FLAGS: u16 = 256;

/// Signature inception is backdated to tolerate resolver clock skew.
const INCEPTION_SKEW: time::Duration = time::Duration::hours(1);

/// Root-zone signer holding a single Ed25519 zone-signing key.
pub struct Ed25519ZoneSigner {
    signer: SigSigner,
    key_tag: u16,
    soa: Record,
}

impl Ed25519ZoneSigner {
    pub fn new(pkcs8: &PrivatePkcs8KeyDer<'_>, zone: &ZoneConfig) -> Result<Self, DomainError> {
        let signing_key = Ed25519SigningKey::from_pkcs8(pkcs8)
            .map_err(|e| DomainError::Signing(format!("Invalid Ed25519 key: {}", e)))?;
        let public_key = signing_key
            .to_public_key()
            .map_err(|e| DomainError::Signing(format!("Failed to derive public key: {}", e)))?;

        let dnskey = DNSKEY::with_flags(
            ZONE_KEY_FLAGS,
            PublicKeyBuf::new(public_key.public_bytes().to_vec(), Algorithm::ED25519),
        );
        let key_tag = dnskey
            .calculate_key_tag()
            .map_err(|e| DomainError::Signing(format!("Failed to compute key tag: {}", e)))?;

        let signer = SigSigner::dnssec(
            dnskey,
            Box::new(signing_key),
            Name::root(),
            Duration::from_secs(zone.signature_validity_secs),
        );

        let soa = Self::build_soa(zone, soa_serial(Utc::now()));

        info!(key_tag, algorithm = "ED25519", "Zone signer ready");

        Ok(Self {
            signer,
            key_tag,
            soa,
        })
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    fn build_soa(zone: &ZoneConfig, serial: u32) -> Record {
        let soa = SOA::new(
            Name::root(),
            Name::root(),
            serial,
            zone.refresh,
            zone.retry,
            zone.expire,
            zone.minimum,
        );
        Record::from_rdata(Name::root(), zone.soa_ttl, RData::SOA(soa))
    }

    fn sign_group(&self, owner: &Name, records: &[Record]) -> Option<Record> {
        let first = records.first()?;
        let ttl = records.iter().map(Record::ttl).min().unwrap_or(first.ttl());

        let mut rrset = RecordSet::new(owner.clone(), first.record_type(), 0);
        for record in records {
            rrset.insert(record.clone(), 0);
        }

        let inception = OffsetDateTime::now_utc() - INCEPTION_SKEW;
        match RRSIG::from_rrset(&rrset, DNSClass::IN, inception, &self.signer) {
            Ok(rrsig) => Some(Record::from_rdata(
                owner.clone(),
                ttl,
                RData::DNSSEC(DNSSECRData::RRSIG(rrsig)),
            )),
            Err(e) => {
                warn!(owner = %owner, record_type = ?first.record_type(), error = %e, "Failed to sign RRset");
                None
            }
        }
    }
}

impl ZoneSigner for Ed25519ZoneSigner {
    fn sign_rrset(&self, records: &mut Vec<Record>, role: RecordType) {
        let role = RecordTypeMapper::to_hickory(role);

        let mut groups: Vec<(Name, Vec<Record>)> = Vec::new();
        for record in records.iter().filter(|r| r.record_type() == role) {
            match groups.iter_mut().find(|(owner, _)| owner == record.name()) {
                Some((_, members)) => members.push(record.clone()),
                None => groups.push((record.name().clone(), vec![record.clone()])),
            }
        }

        for (owner, members) in &groups {
            if let Some(rrsig) = self.sign_group(owner, members) {
                records.push(rrsig);
            }
        }
    }

    fn soa(&self) -> Record {
        self.soa.clone()
    }
}

/// `YYYYMMDDHH` of the given instant.
pub fn soa_serial(now: DateTime<Utc>) -> u32 {
    let year = now.year().clamp(0, 4200) as u32;
    year * 1_000_000 + now.month() * 10_000 + now.day() * 100 + now.hour()
}
