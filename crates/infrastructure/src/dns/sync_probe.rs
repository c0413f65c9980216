use super::native_responder::UpstreamNativeResponder;
use async_trait::async_trait;
use ferrous_root_application::ports::HostSyncPort;
use ferrous_root_domain::{DomainError, RecordType};
use hickory_proto::op::ResponseCode;
use std::sync::Arc;
use tracing::debug;

/// The host counts as synchronised once its root server answers an SOA
/// query for the root with NOERROR.
pub struct DnsHostSyncProbe {
    responder: Arc<UpstreamNativeResponder>,
}

impl DnsHostSyncProbe {
    pub fn new(responder: Arc<UpstreamNativeResponder>) -> Self {
        Self { responder }
    }
}

#[async_trait]
impl HostSyncPort for DnsHostSyncProbe {
    async fn is_synced(&self) -> Result<bool, DomainError> {
        match self.responder.query("", RecordType::SOA).await {
            Ok(parsed) => {
                let synced = parsed.rcode == ResponseCode::NoError;
                debug!(rcode = ?parsed.rcode, synced, "Host sync probe answered");
                Ok(synced)
            }
            Err(e) => {
                debug!(server = %self.responder.server_addr(), error = %e, "Host sync probe failed");
                Ok(false)
            }
        }
    }
}
