use ferrous_root_application::use_cases::InitializeBackendUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Waits for the host readiness signal, then initialises the extension
/// backend, retrying until it succeeds or the job is cancelled.
pub struct BackendReadinessJob {
    initialize: Arc<InitializeBackendUseCase>,
    signal: watch::Receiver<bool>,
    retry_delay: Duration,
    shutdown: CancellationToken,
}

impl BackendReadinessJob {
    pub fn new(initialize: Arc<InitializeBackendUseCase>, signal: watch::Receiver<bool>) -> Self {
        Self {
            initialize,
            signal,
            retry_delay: DEFAULT_RETRY_DELAY,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        let mut signal = self.signal.clone();

        tokio::select! {
            _ = self.shutdown.cancelled() => {
                info!("BackendReadinessJob: shutting down before host sync");
                return;
            }
            fired = async { signal.wait_for(|synced| *synced).await.is_ok() } => {
                if !fired {
                    error!("Host readiness signal dropped before firing");
                    return;
                }
            }
        }

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.initialize.execute().await {
                Ok(_) => {
                    info!(attempt, "Extension backend ready, serving queries");
                    return;
                }
                Err(e) => {
                    error!(attempt, error = %e, retry_in_ms = self.retry_delay.as_millis() as u64, "Extension backend initialization failed");
                }
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("BackendReadinessJob: shutting down");
                    return;
                }
                _ = tokio::time::sleep(self.retry_delay) => {}
            }
        }
    }
}
