pub mod backend_readiness;
pub mod cache_maintenance;
pub mod host_sync;
pub mod runner;

pub use backend_readiness::BackendReadinessJob;
pub use cache_maintenance::CacheMaintenanceJob;
pub use host_sync::HostSyncMonitorJob;
pub use runner::JobRunner;
