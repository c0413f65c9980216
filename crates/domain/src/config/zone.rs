use serde::{Deserialize, Serialize};

/// Root zone signing key and the SOA/NSEC parameters served with denials.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// PKCS#8 Ed25519 key. Generated and written here when missing.
    #[serde(default)]
    pub key_file: Option<String>,

    #[serde(default = "default_day")]
    pub soa_ttl: u32,

    #[serde(default = "default_refresh")]
    pub refresh: i32,

    #[serde(default = "default_retry")]
    pub retry: i32,

    #[serde(default = "default_expire")]
    pub expire: i32,

    #[serde(default = "default_day")]
    pub minimum: u32,

    #[serde(default = "default_day")]
    pub nsec_ttl: u32,

    #[serde(default = "default_signature_validity_secs")]
    pub signature_validity_secs: u64,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            key_file: None,
            soa_ttl: default_day(),
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            minimum: default_day(),
            nsec_ttl: default_day(),
            signature_validity_secs: default_signature_validity_secs(),
        }
    }
}

fn default_day() -> u32 {
    86_400
}

fn default_refresh() -> i32 {
    1800
}

fn default_retry() -> i32 {
    900
}

fn default_expire() -> i32 {
    604_800
}

fn default_signature_validity_secs() -> u64 {
    604_800
}
