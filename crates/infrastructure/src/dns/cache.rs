pub mod coarse_clock;
mod key;
mod storage;

pub use key::CacheKey;
pub use storage::{NativeCacheConfig, NativeResponseCache};
