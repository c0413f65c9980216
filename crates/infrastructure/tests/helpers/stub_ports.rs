use async_trait::async_trait;
use bytes::Bytes;
use ferrous_root_application::ports::{ExtensionResolver, NativeResponder, NativeResponse};
use ferrous_root_domain::{DnsQuery, DomainError, RecordType, Referral};
use std::sync::Mutex;

/// Host responder that answers every question the same way and remembers
/// the types it was asked for.
pub struct StaticNativeResponder {
    response: NativeResponse,
    seen: Mutex<Vec<RecordType>>,
}

impl StaticNativeResponder {
    pub fn new(response: NativeResponse) -> Self {
        Self {
            response,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_types(&self) -> Vec<RecordType> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl NativeResponder for StaticNativeResponder {
    async fn respond(&self, query: &DnsQuery) -> Result<NativeResponse, DomainError> {
        self.seen.lock().unwrap().push(query.record_type);
        Ok(self.response.clone())
    }
}

/// Backend returning a fixed wire payload.
pub struct StaticExtension(pub Bytes);

#[async_trait]
impl ExtensionResolver for StaticExtension {
    async fn initialize(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn resolve(
        &self,
        _query: &DnsQuery,
        _referral: Option<&Referral>,
    ) -> Result<Bytes, DomainError> {
        Ok(self.0.clone())
    }

    async fn close(&self) {}
}
