use super::forwarding::{MessageBuilder, ParsedResponse, ResponseParser};
use super::transport::tcp::TcpTransport;
use super::transport::udp::UdpTransport;
use super::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_root_application::ports::{NativeResponder, NativeResponse};
use ferrous_root_domain::{DnsQuery, DomainError, RecordType};
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Asks the host's own root server, which is authoritative for the native zone.
pub struct UpstreamNativeResponder {
    server_addr: SocketAddr,
    udp: UdpTransport,
    tcp: TcpTransport,
    timeout: Duration,
}

impl UpstreamNativeResponder {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            udp: UdpTransport::new(server_addr),
            tcp: TcpTransport::new(server_addr),
            timeout,
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<ParsedResponse, DomainError> {
        let (id, bytes) = MessageBuilder::build_query_with_id(name, record_type)?;

        let parsed = self.exchange(&self.udp, id, &bytes).await?;
        if !parsed.truncated {
            return Ok(parsed);
        }

        debug!(name = %name, record_type = %record_type, "Host response truncated, retrying over TCP");
        self.exchange(&self.tcp, id, &bytes).await
    }

    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        id: u16,
        bytes: &[u8],
    ) -> Result<ParsedResponse, DomainError> {
        let response = transport.send(bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            warn!(
                expected = id,
                received = parsed.id,
                protocol = response.protocol_used,
                "Host response ID mismatch"
            );
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, id
            )));
        }

        Ok(parsed)
    }
}

#[async_trait]
impl NativeResponder for UpstreamNativeResponder {
    async fn respond(&self, query: &DnsQuery) -> Result<NativeResponse, DomainError> {
        let parsed = self.query(&query.name, query.record_type).await?;

        // SERVFAIL from the host is a collaborator failure, not zone data.
        if parsed.rcode == ResponseCode::ServFail {
            return Err(DomainError::NativeResolution(format!(
                "Host root server {} returned SERVFAIL for {}",
                self.server_addr, query.name
            )));
        }

        Ok(parsed.response)
    }
}
