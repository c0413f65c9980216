pub mod cache;
pub mod errors;
pub mod extension;
pub mod logging;
pub mod native;
pub mod root;
pub mod server;
pub mod zone;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use extension::ExtensionConfig;
pub use logging::LoggingConfig;
pub use native::NativeConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use zone::ZoneConfig;
