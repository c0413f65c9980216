use async_trait::async_trait;
use bytes::Bytes;
use ferrous_root_domain::{DnsQuery, DomainError, Referral};

/// Client for the external naming backend.
#[async_trait]
pub trait ExtensionResolver: Send + Sync {
    async fn initialize(&self) -> Result<(), DomainError>;

    /// Back-to-back wire-format records for `query`. An empty buffer is an
    /// authoritative "no data", distinct from `Err`.
    ///
    /// `referral` is set for delegation-triggered lookups and absent for
    /// names under the direct-extension TLD.
    async fn resolve(
        &self,
        query: &DnsQuery,
        referral: Option<&Referral>,
    ) -> Result<Bytes, DomainError>;

    async fn close(&self);
}
