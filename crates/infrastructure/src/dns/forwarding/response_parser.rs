use ferrous_root_application::ports::NativeResponse;
use ferrous_root_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    pub truncated: bool,
    pub response: NativeResponse,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let aa = message.authoritative();

        let response = NativeResponse {
            answer: message.answers().to_vec(),
            authority: message.name_servers().to_vec(),
            additional: message.additionals().to_vec(),
            aa,
            response_code: rcode,
        };

        debug!(
            rcode = ?rcode,
            answers = response.answer.len(),
            authority = response.authority.len(),
            truncated,
            "Host response parsed"
        );

        Ok(ParsedResponse {
            id: message.id(),
            rcode,
            truncated,
            response,
        })
    }
}
