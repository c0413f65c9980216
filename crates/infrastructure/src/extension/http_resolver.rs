//! HTTP client for the external naming backend.
//!
//! ```text
//! GET  {base}/health                      -> 2xx when the backend can serve
//! POST {base}/resolve  {name, type, ...}  -> 200 {"records": "<base64 wire RRs>"}
//!                                         -> 404 no data
//! ```

use super::registry::contract_address;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use ferrous_root_application::ports::ExtensionResolver;
use ferrous_root_domain::{DnsQuery, DomainError, ExtensionKind, Referral};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct ResolveRequest<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    record_type: String,
    type_code: u16,
    kind: &'static str,
    target: Option<&'a str>,
    registry: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResolveResponse {
    #[serde(default)]
    records: String,
}

pub struct HttpExtensionResolver {
    base_url: String,
    client: reqwest::Client,
    open: AtomicBool,
}

impl HttpExtensionResolver {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(8)
            .build()
            .map_err(|e| {
                DomainError::ExtensionBackend(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            open: AtomicBool::new(false),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    fn build_request<'a>(
        query: &'a DnsQuery,
        referral: Option<&'a Referral>,
    ) -> ResolveRequest<'a> {
        let kind = referral.map_or(ExtensionKind::Direct, |r| r.kind);
        let target = referral.map(|r| r.target.as_ref());
        let registry = match (kind, target) {
            (ExtensionKind::Abstract, Some(target)) => contract_address(target),
            _ => None,
        };

        ResolveRequest {
            name: &query.name,
            record_type: query.record_type.to_string(),
            type_code: query.record_type.to_u16(),
            kind: kind.as_str(),
            target,
            registry,
        }
    }
}

#[async_trait]
impl ExtensionResolver for HttpExtensionResolver {
    async fn initialize(&self) -> Result<(), DomainError> {
        let url = format!("{}/health", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            DomainError::ExtensionBackend(format!("Health check to {} failed: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::ExtensionBackend(format!(
                "Backend {} returned HTTP {} on health check",
                self.base_url,
                status.as_u16()
            )));
        }

        self.open.store(true, Ordering::Release);
        info!(url = %self.base_url, "Extension backend initialized");
        Ok(())
    }

    async fn resolve(
        &self,
        query: &DnsQuery,
        referral: Option<&Referral>,
    ) -> Result<Bytes, DomainError> {
        let url = format!("{}/resolve", self.base_url);
        let body = Self::build_request(query, referral);

        debug!(
            name = %body.name,
            record_type = body.record_type,
            kind = body.kind,
            registry = ?body.registry,
            "Querying extension backend"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::ExtensionTimeout {
                        name: query.name.to_string(),
                    }
                } else {
                    DomainError::ExtensionBackend(format!("Request to {} failed: {}", url, e))
                }
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(Bytes::new()),
            status if !status.is_success() => {
                warn!(name = %query.name, status = status.as_u16(), "Extension backend error status");
                return Err(DomainError::ExtensionBackend(format!(
                    "Backend returned HTTP {} for {}",
                    status.as_u16(),
                    query.name
                )));
            }
            _ => {}
        }

        let parsed: ResolveResponse = response.json().await.map_err(|e| {
            DomainError::ExtensionBackend(format!("Invalid backend response body: {}", e))
        })?;

        let records = STANDARD.decode(parsed.records.trim()).map_err(|e| {
            DomainError::Codec(format!("Backend records are not valid base64: {}", e))
        })?;

        Ok(Bytes::from(records))
    }

    async fn close(&self) {
        if self.open.swap(false, Ordering::AcqRel) {
            info!(url = %self.base_url, "Extension backend closed");
        }
    }
}
