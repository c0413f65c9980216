use super::RecordType;
use std::sync::Arc;

/// A root-level question after case normalization.
///
/// `name` carries no trailing dot and is lowercase; `labels` is recomputed
/// from it, so every routing decision sees the same view of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub tld: Arc<str>,
    pub labels: Vec<String>,
}

impl DnsQuery {
    pub fn new(name: &str, record_type: RecordType, tld: &str) -> Self {
        let name = normalize(name);
        let labels = split_labels(&name);

        Self {
            name: name.into(),
            record_type,
            tld: normalize(tld).into(),
            labels,
        }
    }

    /// Builds a query whose TLD is the last label of `name`.
    pub fn from_name(name: &str, record_type: RecordType) -> Self {
        let normalized = normalize(name);
        let tld = normalized.rsplit('.').next().unwrap_or_default().to_string();
        Self::new(&normalized, record_type, &tld)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// The resolver sent only the TLD (query name minimization).
    pub fn is_minimized(&self) -> bool {
        self.labels.len() < 2
    }

    pub fn is_apex(&self) -> bool {
        self.name == self.tld
    }

    pub fn with_record_type(&self, record_type: RecordType) -> Self {
        Self {
            record_type,
            ..self.clone()
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

fn split_labels(name: &str) -> Vec<String> {
    if name.is_empty() {
        return Vec::new();
    }
    name.split('.').map(str::to_string).collect()
}
