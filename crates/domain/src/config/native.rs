use serde::{Deserialize, Serialize};

/// The host root server whose zone this process extends.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NativeConfig {
    #[serde(default = "default_root_server")]
    pub root_server: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Hold queries (REFUSED) until the host reports it is synchronised.
    #[serde(default = "default_true")]
    pub wait_for_sync: bool,

    #[serde(default = "default_sync_probe_interval_secs")]
    pub sync_probe_interval_secs: u64,
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            query_timeout_ms: default_query_timeout_ms(),
            wait_for_sync: true,
            sync_probe_interval_secs: default_sync_probe_interval_secs(),
        }
    }
}

fn default_root_server() -> String {
    "127.0.0.1:5349".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

fn default_sync_probe_interval_secs() -> u64 {
    5
}
