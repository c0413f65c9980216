use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::extension::ExtensionConfig;
use super::logging::LoggingConfig;
use super::native::NativeConfig;
use super::server::ServerConfig;
use super::zone::ZoneConfig;

const LOCAL_CONFIG: &str = "ferrous-root.toml";
const SYSTEM_CONFIG: &str = "/etc/ferrous-root/config.toml";

/// Main configuration structure for Ferrous Root
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Reserved labels and the resolution backend
    #[serde(default)]
    pub extension: ExtensionConfig,

    /// Host root server
    #[serde(default)]
    pub native: NativeConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    /// Signing key and negative-answer parameters
    #[serde(default)]
    pub zone: ZoneConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-root.toml in current directory
    /// 3. /etc/ferrous-root/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize_labels();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(root) = overrides.root_server {
            self.native.root_server = root;
        }
        if let Some(url) = overrides.backend_url {
            self.extension.backend_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Labels are compared lowercase and without dots everywhere else.
    fn normalize_labels(&mut self) {
        for label in [
            &mut self.extension.direct_label,
            &mut self.extension.abstract_label,
            &mut self.extension.synthetic_zone,
        ] {
            *label = label.trim_matches('.').to_ascii_lowercase();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        let ext = &self.extension;
        for (field, label) in [
            ("direct_label", &ext.direct_label),
            ("abstract_label", &ext.abstract_label),
            ("synthetic_zone", &ext.synthetic_zone),
        ] {
            if label.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "extension.{} cannot be empty",
                    field
                )));
            }
            if label.contains('.') {
                return Err(ConfigError::Validation(format!(
                    "extension.{} must be a single label, got '{}'",
                    field, label
                )));
            }
        }

        if !ext.abstract_label.starts_with('_') {
            return Err(ConfigError::Validation(format!(
                "extension.abstract_label must start with '_', got '{}'",
                ext.abstract_label
            )));
        }

        if ext.direct_label.eq_ignore_ascii_case(&ext.abstract_label)
            || ext.direct_label.eq_ignore_ascii_case(&ext.synthetic_zone)
            || ext.abstract_label.eq_ignore_ascii_case(&ext.synthetic_zone)
        {
            return Err(ConfigError::Validation(
                "extension labels must be distinct".to_string(),
            ));
        }

        if ext.backend_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "extension.backend_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.native.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "native.query_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.native.root_server.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "native.root_server must be an ip:port address, got '{}'",
                self.native.root_server
            )));
        }

        if self.cache.min_ttl > self.cache.max_ttl {
            return Err(ConfigError::Validation(format!(
                "cache.min_ttl ({}) exceeds cache.max_ttl ({})",
                self.cache.min_ttl, self.cache.max_ttl
            )));
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG).exists() {
            Some(LOCAL_CONFIG.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Some(SYSTEM_CONFIG.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub root_server: Option<String>,
    pub backend_url: Option<String>,
    pub log_level: Option<String>,
}
