use async_trait::async_trait;
use bytes::Bytes;
use ferrous_root_application::ports::{
    ExtensionResolver, HostSyncPort, NativeCachePort, NativeResponse,
};
use ferrous_root_domain::{DnsQuery, DomainError, RecordType, Referral};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Answers probes from a script, then repeats the last answer.
pub struct MockHostSyncPort {
    script: Mutex<VecDeque<Result<bool, DomainError>>>,
    last: Mutex<Result<bool, DomainError>>,
    call_count: AtomicUsize,
}

impl MockHostSyncPort {
    pub fn new(script: Vec<Result<bool, DomainError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(Ok(false)),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn never_synced() -> Self {
        Self::new(vec![])
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostSyncPort for MockHostSyncPort {
    async fn is_synced(&self) -> Result<bool, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(result) => {
                *self.last.lock().unwrap() = result.clone();
                result
            }
            None => self.last.lock().unwrap().clone(),
        }
    }
}

pub struct MockExtensionResolver {
    failures_left: AtomicUsize,
    init_count: AtomicUsize,
    close_count: AtomicUsize,
}

impl MockExtensionResolver {
    pub fn new() -> Self {
        Self::failing(0)
    }

    pub fn failing(initializations: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(initializations),
            init_count: AtomicUsize::new(0),
            close_count: AtomicUsize::new(0),
        }
    }

    pub fn init_count(&self) -> usize {
        self.init_count.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExtensionResolver for MockExtensionResolver {
    async fn initialize(&self) -> Result<(), DomainError> {
        self.init_count.fetch_add(1, Ordering::SeqCst);
        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(DomainError::ExtensionBackend("backend offline".into()));
        }
        Ok(())
    }

    async fn resolve(
        &self,
        _query: &DnsQuery,
        _referral: Option<&Referral>,
    ) -> Result<Bytes, DomainError> {
        Ok(Bytes::new())
    }

    async fn close(&self) {
        self.close_count.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct MockNativeCache {
    len: AtomicUsize,
    purge_count: AtomicUsize,
    removed_per_purge: usize,
}

impl MockNativeCache {
    pub fn new(len: usize, removed_per_purge: usize) -> Self {
        Self {
            len: AtomicUsize::new(len),
            purge_count: AtomicUsize::new(0),
            removed_per_purge,
        }
    }

    pub fn purge_count(&self) -> usize {
        self.purge_count.load(Ordering::SeqCst)
    }
}

impl NativeCachePort for MockNativeCache {
    fn get(&self, _name: &str, _record_type: RecordType) -> Option<NativeResponse> {
        None
    }

    fn set(&self, _name: &str, _record_type: RecordType, _response: NativeResponse) {
        self.len.fetch_add(1, Ordering::SeqCst);
    }

    fn len(&self) -> usize {
        self.len.load(Ordering::SeqCst)
    }

    fn purge_expired(&self) -> usize {
        self.purge_count.fetch_add(1, Ordering::SeqCst);
        let removed = self.removed_per_purge.min(self.len());
        self.len.fetch_sub(removed, Ordering::SeqCst);
        removed
    }
}
