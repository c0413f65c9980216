use super::NativeResponse;
use ferrous_root_domain::RecordType;

/// Shared store of native-zone responses keyed by `(name, type)`.
///
/// Concurrent miss-then-fill races are tolerated: the last write wins.
pub trait NativeCachePort: Send + Sync {
    fn get(&self, name: &str, record_type: RecordType) -> Option<NativeResponse>;
    fn set(&self, name: &str, record_type: RecordType, response: NativeResponse);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops expired entries and returns how many were removed.
    fn purge_expired(&self) -> usize;
}
