//! Mapping between `ferrous_root_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Both sides agree on the IANA type code, so the conversion goes through it.

use ferrous_root_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Codes the domain model has no name for come back as `RecordType::Unknown`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_code(u16::from(hickory_type))
    }
}
