use crate::ports::{NativeCachePort, NativeResponder, NativeResponse};
use ferrous_root_domain::{DnsQuery, DomainError, ExtensionLabels};
use std::sync::Arc;
use tracing::debug;

/// Cache-fronted access to the host's native zone.
pub struct NativeZoneResolver {
    responder: Arc<dyn NativeResponder>,
    cache: Option<Arc<dyn NativeCachePort>>,
    labels: ExtensionLabels,
}

impl NativeZoneResolver {
    pub fn new(responder: Arc<dyn NativeResponder>, labels: ExtensionLabels) -> Self {
        Self {
            responder,
            cache: None,
            labels,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn NativeCachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Responses under the synthetic zone are request-specific and are
    /// never written to the cache.
    pub async fn resolve(&self, query: &DnsQuery) -> Result<NativeResponse, DomainError> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&query.name, query.record_type) {
                debug!(name = %query.name, record_type = %query.record_type, "Native cache hit");
                return Ok(hit);
            }
        }

        let response = self.responder.respond(query).await?;

        if let Some(cache) = &self.cache {
            if self.labels.is_synthetic_zone(&query.tld) {
                debug!(name = %query.name, "Synthetic zone response, not caching");
            } else {
                cache.set(&query.name, query.record_type, response.clone());
            }
        }

        Ok(response)
    }
}
