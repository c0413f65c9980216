use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    #[serde(default)]
    pub min_ttl: u32,

    #[serde(default = "default_max_ttl")]
    pub max_ttl: u32,

    #[serde(default = "default_maintenance_interval_secs")]
    pub maintenance_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_max_entries(),
            min_ttl: 0,
            max_ttl: default_max_ttl(),
            maintenance_interval_secs: default_maintenance_interval_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_entries() -> usize {
    50_000
}

fn default_max_ttl() -> u32 {
    21_600
}

fn default_maintenance_interval_secs() -> u64 {
    60
}
