//! Reserved-label classification for the external naming extension.
//!
//! Every decision is made on a single, lowercase final label. Delegation
//! targets may be nested arbitrarily deep (`ns1.0xabc._eth`), so suffix
//! matching on fixed strings is never used.

use crate::config::ExtensionConfig;
use std::fmt;
use std::sync::Arc;

/// Which flavour of the extension a delegation target points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    /// Target ends in the registry's own label (`eth`).
    Direct,
    /// Target ends in the underscore label (`_eth`) and may encode a forked registry.
    Abstract,
}

impl ExtensionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionKind::Direct => "direct",
            ExtensionKind::Abstract => "abstract",
        }
    }
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is authoritative for a query, decided from its TLD alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TldRoute {
    NativeZone,
    DirectExtension,
    /// The abstract label used as a TLD has no backend meaning of its own.
    Placeholder,
}

/// A delegation found in the native authority section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referral {
    pub kind: ExtensionKind,
    pub target: Arc<str>,
}

impl Referral {
    pub fn new(kind: ExtensionKind, target: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionLabels {
    direct: String,
    abstract_label: String,
    synthetic_zone: String,
}

impl ExtensionLabels {
    pub fn new(direct: &str, abstract_label: &str, synthetic_zone: &str) -> Self {
        Self {
            direct: direct.trim_matches('.').to_ascii_lowercase(),
            abstract_label: abstract_label.trim_matches('.').to_ascii_lowercase(),
            synthetic_zone: synthetic_zone.trim_matches('.').to_ascii_lowercase(),
        }
    }

    pub fn from_config(config: &ExtensionConfig) -> Self {
        Self::new(
            &config.direct_label,
            &config.abstract_label,
            &config.synthetic_zone,
        )
    }

    pub fn direct(&self) -> &str {
        &self.direct
    }

    pub fn abstract_label(&self) -> &str {
        &self.abstract_label
    }

    pub fn synthetic_zone(&self) -> &str {
        &self.synthetic_zone
    }

    pub fn classify_label(&self, label: &str) -> Option<ExtensionKind> {
        if label.eq_ignore_ascii_case(&self.direct) {
            Some(ExtensionKind::Direct)
        } else if label.eq_ignore_ascii_case(&self.abstract_label) {
            Some(ExtensionKind::Abstract)
        } else {
            None
        }
    }

    /// Classifies a delegation hostname by its final label.
    pub fn classify_target(&self, target: &str) -> Option<ExtensionKind> {
        let trimmed = target.trim_end_matches('.');
        if trimmed.is_empty() {
            return None;
        }
        let last = trimmed.rsplit('.').next()?;
        self.classify_label(last)
    }

    pub fn route_tld(&self, tld: &str) -> TldRoute {
        match self.classify_label(tld.trim_end_matches('.')) {
            Some(ExtensionKind::Direct) => TldRoute::DirectExtension,
            Some(ExtensionKind::Abstract) => TldRoute::Placeholder,
            None => TldRoute::NativeZone,
        }
    }

    pub fn is_synthetic_zone(&self, tld: &str) -> bool {
        tld.trim_end_matches('.')
            .eq_ignore_ascii_case(&self.synthetic_zone)
    }
}

impl Default for ExtensionLabels {
    fn default() -> Self {
        Self::from_config(&ExtensionConfig::default())
    }
}
