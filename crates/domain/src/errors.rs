use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Extension backend is not ready")]
    NotReady,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Malformed record payload: {0}")]
    Codec(String),

    #[error("Extension backend error: {0}")]
    ExtensionBackend(String),

    #[error("Extension backend timed out resolving {name}")]
    ExtensionTimeout { name: String },

    #[error("Native zone resolution failed: {0}")]
    NativeResolution(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Zone signing failed: {0}")]
    Signing(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
