use serde::{Deserialize, Serialize};

/// Reserved labels and the backend that answers for them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtensionConfig {
    /// The registry's own top-level label.
    #[serde(default = "default_direct_label")]
    pub direct_label: String,

    /// Underscore-prefixed label for forked registries; also the placeholder TLD.
    #[serde(default = "default_abstract_label")]
    pub abstract_label: String,

    /// Internal zone whose responses are request-specific and never cached.
    #[serde(default = "default_synthetic_zone")]
    pub synthetic_zone: String,

    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    #[serde(default = "default_backend_timeout_ms")]
    pub backend_timeout_ms: u64,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            direct_label: default_direct_label(),
            abstract_label: default_abstract_label(),
            synthetic_zone: default_synthetic_zone(),
            backend_url: default_backend_url(),
            backend_timeout_ms: default_backend_timeout_ms(),
        }
    }
}

fn default_direct_label() -> String {
    "eth".to_string()
}

fn default_abstract_label() -> String {
    "_eth".to_string()
}

fn default_synthetic_zone() -> String {
    "_synth".to_string()
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8053".to_string()
}

fn default_backend_timeout_ms() -> u64 {
    2000
}
