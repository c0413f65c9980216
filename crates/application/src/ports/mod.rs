mod dns_message;
mod extension_resolver;
mod host_sync;
mod native_cache;
mod native_responder;
mod zone_signer;

pub use dns_message::{NativeResponse, ResponseMessage};
pub use extension_resolver::ExtensionResolver;
pub use host_sync::HostSyncPort;
pub use native_cache::NativeCachePort;
pub use native_responder::NativeResponder;
pub use zone_signer::ZoneSigner;

// Re-export for convenience
pub use ferrous_root_domain::DnsQuery;
