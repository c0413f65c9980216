use super::NativeResponse;
use async_trait::async_trait;
use ferrous_root_domain::{DnsQuery, DomainError};

/// The host's responder for the blockchain-native root zone.
#[async_trait]
pub trait NativeResponder: Send + Sync {
    async fn respond(&self, query: &DnsQuery) -> Result<NativeResponse, DomainError>;
}
