use async_trait::async_trait;
use bytes::Bytes;
use ferrous_root_application::ports::{
    ExtensionResolver, NativeCachePort, NativeResponder, NativeResponse, ZoneSigner,
};
use ferrous_root_application::services::RecordTypeMapper;
use ferrous_root_domain::{DnsQuery, DomainError, RecordType, Referral};
use hickory_proto::rr::Record;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use super::root_soa;

// ── Native responder ───────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockNativeResponder {
    responses: RwLock<HashMap<(String, RecordType), NativeResponse>>,
    calls: Mutex<Vec<(String, RecordType)>>,
    should_fail: RwLock<bool>,
}

impl MockNativeResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, response: NativeResponse) {
        self.responses
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), response);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().unwrap() = should_fail;
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NativeResponder for MockNativeResponder {
    async fn respond(&self, query: &DnsQuery) -> Result<NativeResponse, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.name.to_string(), query.record_type));

        if *self.should_fail.read().unwrap() {
            return Err(DomainError::NativeResolution(
                "host root server unreachable".to_string(),
            ));
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&(query.name.to_string(), query.record_type))
            .cloned()
            .unwrap_or_else(|| NativeResponse::new(Vec::new(), Vec::new(), true)))
    }
}

// ── Native cache ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockNativeCache {
    entries: RwLock<HashMap<(String, RecordType), NativeResponse>>,
    writes: AtomicUsize,
}

impl MockNativeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    pub fn contains(&self, name: &str, record_type: RecordType) -> bool {
        self.entries
            .read()
            .unwrap()
            .contains_key(&(name.to_string(), record_type))
    }
}

impl NativeCachePort for MockNativeCache {
    fn get(&self, name: &str, record_type: RecordType) -> Option<NativeResponse> {
        self.entries
            .read()
            .unwrap()
            .get(&(name.to_string(), record_type))
            .cloned()
    }

    fn set(&self, name: &str, record_type: RecordType, response: NativeResponse) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.entries
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), response);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    fn purge_expired(&self) -> usize {
        0
    }
}

// ── Zone signer ────────────────────────────────────────────────────────────

/// Records every signing request as `(role, records of that role present)`.
#[derive(Default)]
pub struct MockZoneSigner {
    requests: Mutex<Vec<(RecordType, usize)>>,
}

impl MockZoneSigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<(RecordType, usize)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn roles(&self) -> Vec<RecordType> {
        self.requests().into_iter().map(|(role, _)| role).collect()
    }
}

impl ZoneSigner for MockZoneSigner {
    fn sign_rrset(&self, records: &mut Vec<Record>, role: RecordType) {
        let role_type = RecordTypeMapper::to_hickory(role);
        let count = records
            .iter()
            .filter(|r| r.record_type() == role_type)
            .count();
        self.requests.lock().unwrap().push((role, count));
    }

    fn soa(&self) -> Record {
        root_soa()
    }
}

// ── Extension resolver ─────────────────────────────────────────────────────

#[derive(Clone)]
pub enum BackendBehavior {
    Data(Bytes),
    Empty,
    Fail,
    Hang(Duration),
}

pub struct MockExtensionResolver {
    behavior: RwLock<BackendBehavior>,
    calls: Mutex<Vec<(String, RecordType, Option<Referral>)>>,
    init_failures_left: AtomicUsize,
    initialized: AtomicUsize,
    closed: AtomicUsize,
}

impl MockExtensionResolver {
    pub fn new() -> Self {
        Self {
            behavior: RwLock::new(BackendBehavior::Empty),
            calls: Mutex::new(Vec::new()),
            init_failures_left: AtomicUsize::new(0),
            initialized: AtomicUsize::new(0),
            closed: AtomicUsize::new(0),
        }
    }

    pub fn with_data(payload: Vec<u8>) -> Self {
        let mock = Self::new();
        mock.set_behavior(BackendBehavior::Data(Bytes::from(payload)));
        mock
    }

    pub fn set_behavior(&self, behavior: BackendBehavior) {
        *self.behavior.write().unwrap() = behavior;
    }

    pub fn fail_initializations(&self, times: usize) {
        self.init_failures_left.store(times, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, RecordType, Option<Referral>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn init_count(&self) -> usize {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Default for MockExtensionResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExtensionResolver for MockExtensionResolver {
    async fn initialize(&self) -> Result<(), DomainError> {
        let left = self.init_failures_left.load(Ordering::SeqCst);
        if left > 0 {
            self.init_failures_left.store(left - 1, Ordering::SeqCst);
            return Err(DomainError::ExtensionBackend("backend offline".to_string()));
        }
        self.initialized.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn resolve(
        &self,
        query: &DnsQuery,
        referral: Option<&Referral>,
    ) -> Result<Bytes, DomainError> {
        self.calls.lock().unwrap().push((
            query.name.to_string(),
            query.record_type,
            referral.cloned(),
        ));

        let behavior = self.behavior.read().unwrap().clone();
        match behavior {
            BackendBehavior::Data(bytes) => Ok(bytes),
            BackendBehavior::Empty => Ok(Bytes::new()),
            BackendBehavior::Fail => Err(DomainError::ExtensionBackend(
                "rpc call reverted".to_string(),
            )),
            BackendBehavior::Hang(duration) => {
                tokio::time::sleep(duration).await;
                Ok(Bytes::new())
            }
        }
    }

    async fn close(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
