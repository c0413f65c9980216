use crate::ports::ExtensionResolver;
use crate::services::ReadinessGate;
use ferrous_root_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

/// Brings the extension backend up and down around the readiness gate.
pub struct InitializeBackendUseCase {
    extension: Arc<dyn ExtensionResolver>,
    readiness: Arc<ReadinessGate>,
}

impl InitializeBackendUseCase {
    pub fn new(extension: Arc<dyn ExtensionResolver>, readiness: Arc<ReadinessGate>) -> Self {
        Self {
            extension,
            readiness,
        }
    }

    /// Returns `Ok(true)` when this call made the gate ready. A failed
    /// initialization leaves it `NotReady`.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<bool, DomainError> {
        if self.readiness.is_ready() {
            return Ok(false);
        }

        self.extension.initialize().await?;

        let transitioned = self.readiness.mark_ready();
        if transitioned {
            info!("Extension backend initialized, accepting extension queries");
        }
        Ok(transitioned)
    }

    /// Gate first, so no query reaches a closing backend.
    pub async fn shutdown(&self) {
        if self.readiness.mark_not_ready() {
            info!("Extension backend marked not ready");
        }
        self.extension.close().await;
    }
}
