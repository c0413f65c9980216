//! Queries sent to the host root server.
//!
//! Root queries are iterative: RD is cleared and the DO bit is set so the
//! host returns its signatures along with the records.

use ferrous_root_application::services::RecordTypeMapper;
use ferrous_root_domain::{DomainError, RecordType};
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

const EDNS_PAYLOAD: u16 = 4096;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query and return the message ID alongside the wire bytes.
    pub fn build_query_with_id(
        name: &str,
        record_type: RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Self::parse_name(name)?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(query);

        let edns = message.extensions_mut().get_or_insert_with(Edns::new);
        edns.set_max_payload(EDNS_PAYLOAD);
        edns.set_dnssec_ok(true);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn parse_name(name: &str) -> Result<Name, DomainError> {
        let trimmed = name.trim_end_matches('.');
        if trimmed.is_empty() {
            return Ok(Name::root());
        }
        Name::from_ascii(format!("{}.", trimmed)).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
