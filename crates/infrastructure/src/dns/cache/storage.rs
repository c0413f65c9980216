use super::coarse_clock::{coarse_now_secs, tick};
use super::key::CacheKey;
use dashmap::DashMap;
use ferrous_root_application::ports::{NativeCachePort, NativeResponse};
use ferrous_root_domain::config::CacheConfig;
use ferrous_root_domain::RecordType;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

pub struct NativeCacheConfig {
    pub max_entries: usize,
    pub min_ttl: u32,
    pub max_ttl: u32,
    pub shard_amount: usize,
}

impl NativeCacheConfig {
    pub fn from_config(config: &CacheConfig) -> Self {
        Self {
            max_entries: config.max_entries,
            min_ttl: config.min_ttl,
            max_ttl: config.max_ttl,
            shard_amount: 16,
        }
    }
}

struct CachedResponse {
    response: NativeResponse,
    expires_at_secs: u64,
}

impl CachedResponse {
    #[inline]
    fn is_expired_at_secs(&self, now_secs: u64) -> bool {
        now_secs >= self.expires_at_secs
    }
}

/// Native-zone responses keyed by `(name, type)`.
///
/// An entry lives for the smallest TTL among its records, clamped to
/// `[min_ttl, max_ttl]`. Responses without records get `min_ttl`.
pub struct NativeResponseCache {
    entries: DashMap<CacheKey, CachedResponse, FxBuildHasher>,
    max_entries: usize,
    min_ttl: u32,
    max_ttl: u32,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl NativeResponseCache {
    pub fn new(config: NativeCacheConfig) -> Self {
        info!(
            max_entries = config.max_entries,
            min_ttl = config.min_ttl,
            max_ttl = config.max_ttl,
            "Initializing native response cache"
        );

        Self {
            entries: DashMap::with_capacity_and_hasher_and_shard_amount(
                config.max_entries.min(4096),
                FxBuildHasher,
                config.shard_amount.next_power_of_two().max(2),
            ),
            max_entries: config.max_entries.max(1),
            min_ttl: config.min_ttl,
            max_ttl: config.max_ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn clamp_ttl(&self, ttl: u32) -> u32 {
        ttl.clamp(self.min_ttl, self.max_ttl.max(self.min_ttl))
    }

    /// Seconds left before the entry expires, `None` when absent or expired.
    pub fn remaining_ttl(&self, name: &str, record_type: RecordType) -> Option<u64> {
        let now = coarse_now_secs();
        let entry = self.entries.get(&CacheKey::new(name, record_type))?;
        if entry.is_expired_at_secs(now) {
            return None;
        }
        Some(entry.expires_at_secs - now)
    }

    pub fn hit_count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn miss_count(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn make_room(&self) {
        if self.purge_expired() > 0 && self.entries.len() < self.max_entries {
            return;
        }

        let victim = self.entries.iter().next().map(|e| e.key().clone());
        if let Some(key) = victim {
            self.entries.remove(&key);
            debug!(name = %key.name, record_type = %key.record_type, "Evicted native cache entry");
        }
    }
}

impl NativeCachePort for NativeResponseCache {
    fn get(&self, name: &str, record_type: RecordType) -> Option<NativeResponse> {
        let key = CacheKey::new(name, record_type);

        if let Some(entry) = self.entries.get(&key) {
            if !entry.is_expired_at_secs(coarse_now_secs()) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.response.clone());
            }
            drop(entry);
            self.entries
                .remove_if(&key, |_, v| v.is_expired_at_secs(coarse_now_secs()));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn set(&self, name: &str, record_type: RecordType, response: NativeResponse) {
        let ttl = self.clamp_ttl(response.min_ttl().unwrap_or(self.min_ttl));
        let key = CacheKey::new(name, record_type);

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.make_room();
        }

        self.entries.insert(
            key,
            CachedResponse {
                response,
                expires_at_secs: coarse_now_secs() + u64::from(ttl),
            },
        );

        debug!(name = %name, record_type = %record_type, ttl, "Cached native response");
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn purge_expired(&self) -> usize {
        tick();
        let now = coarse_now_secs();
        let before = self.entries.len();
        self.entries.retain(|_, v| !v.is_expired_at_secs(now));
        let removed = before.saturating_sub(self.entries.len());

        debug!(
            removed,
            remaining = self.entries.len(),
            hits = self.hit_count(),
            misses = self.miss_count(),
            "Purged expired native cache entries"
        );
        removed
    }
}
