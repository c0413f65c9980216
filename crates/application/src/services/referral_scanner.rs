use ferrous_root_domain::{ExtensionLabels, Referral};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// Finds delegations to an extension nameserver in a native authority section.
pub struct ReferralScanner {
    labels: ExtensionLabels,
}

impl ReferralScanner {
    pub fn new(labels: ExtensionLabels) -> Self {
        Self { labels }
    }

    /// Walks NS records in section order. When several targets match, the
    /// last one wins.
    pub fn scan(&self, authority: &[Record]) -> Option<Referral> {
        let mut found = None;

        for record in authority {
            let RData::NS(ns) = record.data() else {
                continue;
            };

            let target = ns.0.to_ascii();
            if let Some(kind) = self.labels.classify_target(&target) {
                debug!(owner = %record.name(), target = %target, kind = %kind, "Extension referral found");
                found = Some(Referral::new(kind, target.trim_end_matches('.')));
            }
        }

        found
    }
}
