use crate::ports::{ExtensionResolver, ResponseMessage, ZoneSigner};
use crate::services::{
    NativeZoneResolver, NegativeProofSynthesizer, ReadinessGate, ReferralScanner,
    ResponseAssembler,
};
use bytes::Bytes;
use ferrous_root_domain::{
    DnsQuery, DnsRequest, ExtensionLabels, RecordType, Referral, TldRoute,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BACKEND_TIMEOUT: Duration = Duration::from_secs(2);

/// Per-query dispatcher deciding who is authoritative for a root-level name.
pub struct HandleRootQueryUseCase {
    readiness: Arc<ReadinessGate>,
    labels: ExtensionLabels,
    native: NativeZoneResolver,
    scanner: ReferralScanner,
    extension: Arc<dyn ExtensionResolver>,
    assembler: ResponseAssembler,
    denials: NegativeProofSynthesizer,
    backend_timeout: Duration,
}

impl HandleRootQueryUseCase {
    pub fn new(
        readiness: Arc<ReadinessGate>,
        labels: ExtensionLabels,
        native: NativeZoneResolver,
        extension: Arc<dyn ExtensionResolver>,
        signer: Arc<dyn ZoneSigner>,
    ) -> Self {
        Self {
            readiness,
            scanner: ReferralScanner::new(labels.clone()),
            labels,
            native,
            extension,
            assembler: ResponseAssembler::new(Arc::clone(&signer)),
            denials: NegativeProofSynthesizer::new(signer),
            backend_timeout: DEFAULT_BACKEND_TIMEOUT,
        }
    }

    pub fn with_backend_timeout(mut self, timeout: Duration) -> Self {
        self.backend_timeout = timeout;
        self
    }

    pub fn with_nsec_ttl(mut self, nsec_ttl: u32) -> Self {
        self.denials = self.denials.with_nsec_ttl(nsec_ttl);
        self
    }

    pub async fn execute(&self, tld: &str, request: &DnsRequest) -> ResponseMessage {
        if !self.readiness.is_ready() {
            debug!(domain = %request.domain, "Extension backend not ready, refusing query");
            return ResponseMessage::refused();
        }

        let query = DnsQuery::new(&request.domain, request.record_type, tld);

        match self.labels.route_tld(&query.tld) {
            TldRoute::DirectExtension => self.resolve_direct(&query).await,
            TldRoute::Placeholder => {
                debug!(name = %query.name, "Placeholder TLD, denying");
                self.denials.denial(&query)
            }
            TldRoute::NativeZone => self.resolve_native(&query).await,
        }
    }

    async fn resolve_direct(&self, query: &DnsQuery) -> ResponseMessage {
        if query.is_minimized() {
            debug!(name = %query.name, "Minimized query for direct extension TLD, asking for full name");
            return self.denials.denial(query);
        }

        match self.call_backend(query, None).await {
            Some(payload) => self.assemble_or_deny(&payload, query),
            None => self.denials.denial(query),
        }
    }

    async fn resolve_native(&self, query: &DnsQuery) -> ResponseMessage {
        // DS at the root carries no delegation, so the NS view feeds the scanner.
        let ds_boundary = query.record_type == RecordType::DS && query.label_count() == 1;

        let native = match self.native.resolve(query).await {
            Ok(response) => response,
            Err(e) => {
                warn!(name = %query.name, record_type = %query.record_type, error = %e, "Native zone resolution failed");
                return ResponseMessage::server_failure();
            }
        };

        let (scanned, retained) = if ds_boundary {
            let ns_query = query.with_record_type(RecordType::NS);
            match self.native.resolve(&ns_query).await {
                Ok(ns) => (ns, Some(native)),
                Err(e) => {
                    warn!(name = %query.name, error = %e, "NS re-lookup for DS failed, returning DS result");
                    return native.into();
                }
            }
        } else {
            (native, None)
        };

        if !scanned.has_authority() {
            return retained.unwrap_or(scanned).into();
        }

        let Some(referral) = self.scanner.scan(&scanned.authority) else {
            return retained.unwrap_or(scanned).into();
        };

        if query.is_minimized() && !ds_boundary {
            debug!(name = %query.name, target = %referral.target, "Referral needs the full name, denying");
            return self.denials.denial(query);
        }

        match self.call_backend(query, Some(&referral)).await {
            Some(payload) => self.assemble_or_deny(&payload, query),
            None => {
                debug!(name = %query.name, kind = %referral.kind, "No extension data, suppressing native referral");
                self.denials.denial(query)
            }
        }
    }

    /// `None` covers empty data, backend errors and timeouts alike.
    async fn call_backend(&self, query: &DnsQuery, referral: Option<&Referral>) -> Option<Bytes> {
        let lookup = self.extension.resolve(query, referral);

        match tokio::time::timeout(self.backend_timeout, lookup).await {
            Ok(Ok(payload)) if payload.is_empty() => {
                debug!(name = %query.name, record_type = %query.record_type, "Extension backend has no data");
                None
            }
            Ok(Ok(payload)) => Some(payload),
            Ok(Err(e)) => {
                warn!(name = %query.name, record_type = %query.record_type, error = %e, "Extension backend lookup failed");
                None
            }
            Err(_) => {
                warn!(
                    name = %query.name,
                    timeout_ms = self.backend_timeout.as_millis() as u64,
                    "Extension backend timed out"
                );
                None
            }
        }
    }

    fn assemble_or_deny(&self, payload: &[u8], query: &DnsQuery) -> ResponseMessage {
        match self.assembler.assemble(payload, query.record_type) {
            Ok(response) => response,
            Err(e) => {
                warn!(name = %query.name, error = %e, "Discarding malformed extension payload");
                self.denials.denial(query)
            }
        }
    }
}
