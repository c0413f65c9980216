use async_trait::async_trait;
use ferrous_root_domain::DomainError;

#[async_trait]
pub trait HostSyncPort: Send + Sync {
    /// Whether the host's chain state is fully synchronised.
    async fn is_synced(&self) -> Result<bool, DomainError>;
}
