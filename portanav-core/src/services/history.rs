//! History synchronizer
//!
//! Bidirectional bridge between the navigation state and the session
//! history. Outbound: every user-originated navigation pushes an entry and
//! its fragment. Inbound: back/forward payloads and the startup fragment
//! resolve to replay navigations; anything unknown or malformed resolves
//! to nothing.

use std::sync::Arc;

use crate::traits::HistoryStore;
use crate::types::{HistoryEntry, SectionRegistry};

pub(crate) struct HistorySynchronizer {
    store: Arc<dyn HistoryStore>,
}

impl HistorySynchronizer {
    pub(crate) fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self { store }
    }

    /// Push a `{ section }` entry and set the fragment to `#<id>`.
    ///
    /// Only ids from the registry ever reach this point, so unknown ids
    /// are never produced on write.
    pub(crate) fn record(&self, section_id: &str) {
        let entry = HistoryEntry {
            section: section_id.to_string(),
        };
        self.store.push(&entry, &format!("#{section_id}"));
    }

    /// Resolve a restored history payload to a replay target.
    pub(crate) fn replay_target(
        payload: Option<&serde_json::Value>,
        registry: &SectionRegistry,
    ) -> Option<String> {
        let entry: HistoryEntry = serde_json::from_value(payload?.clone()).ok()?;
        registry.get(&entry.section).map(|s| s.id.clone())
    }

    /// Resolve the startup fragment to a replay target, if it names a
    /// known section different from the current one.
    pub(crate) fn startup_target(
        &self,
        registry: &SectionRegistry,
        current: &str,
    ) -> Option<String> {
        let fragment = self.store.initial_fragment()?;
        let id = fragment.strip_prefix('#').unwrap_or(&fragment);
        if id.is_empty() || id == current {
            return None;
        }
        registry.get(id).map(|s| s.id.clone())
    }
}
