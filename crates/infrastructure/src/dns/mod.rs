pub mod cache;
pub mod forwarding;
pub mod native_responder;
pub mod server;
pub mod sync_probe;
pub mod transport;

pub use cache::{CacheKey, NativeCacheConfig, NativeResponseCache};
pub use native_responder::UpstreamNativeResponder;
pub use server::RootServerHandler;
pub use sync_probe::DnsHostSyncProbe;
