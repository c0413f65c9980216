use ferrous_root_domain::RecordType;
use hickory_proto::rr::Record;

/// Signing collaborator for the root zone.
pub trait ZoneSigner: Send + Sync {
    /// Appends RRSIGs covering the records of `role` in `records`, one per
    /// owner name. Records of any other type are left unsigned. An empty
    /// set is a no-op.
    fn sign_rrset(&self, records: &mut Vec<Record>, role: RecordType);

    /// The zone's canonical SOA record.
    fn soa(&self) -> Record;
}
