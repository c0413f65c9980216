use ferrous_root_application::ports::NativeCachePort;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const DEFAULT_INTERVAL_SECS: u64 = 60;

pub struct CacheMaintenanceJob {
    cache: Arc<dyn NativeCachePort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheMaintenanceJob {
    pub fn new(cache: Arc<dyn NativeCachePort>) -> Self {
        Self {
            cache,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting native cache maintenance");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        // The first tick completes immediately; nothing to purge yet.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CacheMaintenanceJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let removed = self.cache.purge_expired();
                    if removed > 0 {
                        info!(removed, cache_size = self.cache.len(), "Native cache purge completed");
                    } else {
                        debug!(cache_size = self.cache.len(), "Native cache purge found nothing");
                    }
                }
            }
        }
    }
}
