use ferrous_root_application::ports::HostSyncPort;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const DEFAULT_PROBE_INTERVAL_SECS: u64 = 5;

/// Polls the host until its chain state is synchronised, then publishes
/// `true` once on the readiness channel and stops.
pub struct HostSyncMonitorJob {
    probe: Arc<dyn HostSyncPort>,
    signal: watch::Sender<bool>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl HostSyncMonitorJob {
    pub fn new(probe: Arc<dyn HostSyncPort>, signal: watch::Sender<bool>) -> Self {
        Self {
            probe,
            signal,
            interval_secs: DEFAULT_PROBE_INTERVAL_SECS,
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
        if *self.signal.borrow() {
            debug!("Host already reported synchronised");
            return;
        }

        info!(interval_secs = self.interval_secs, "Starting host sync monitor");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("HostSyncMonitorJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    match self.probe.is_synced().await {
                        Ok(true) => {
                            self.signal.send_replace(true);
                            info!("Host chain state synchronised");
                            break;
                        }
                        Ok(false) => debug!("Host not yet synchronised"),
                        Err(e) => warn!(error = %e, "Host sync probe failed"),
                    }
                }
            }
        }
    }
}
