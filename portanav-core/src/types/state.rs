//! Navigation state and history payload

use serde::{Deserialize, Serialize};

/// The single mutable record of the router's current position.
///
/// Constructed once at startup and threaded through the components that
/// need it; there are no ambient singletons.
#[derive(Debug, Clone)]
pub struct NavigationState {
    current_section_id: String,
    is_transitioning: bool,
    is_mobile: bool,
}

impl NavigationState {
    pub(crate) fn new(current_section_id: String) -> Self {
        Self {
            current_section_id,
            is_transitioning: false,
            is_mobile: false,
        }
    }

    /// Id of the currently active section. Never empty once initialized.
    #[must_use]
    pub fn current_section_id(&self) -> &str {
        &self.current_section_id
    }

    /// Whether a hide/show sequence is in flight. While true, navigation
    /// requests are dropped, not queued.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Whether the viewport is below the mobile breakpoint, as of the last
    /// indicator placement or resize.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub(crate) fn set_current_section(&mut self, id: &str) {
        self.current_section_id = id.to_string();
    }

    pub(crate) fn begin_transition(&mut self) {
        self.is_transitioning = true;
    }

    pub(crate) fn end_transition(&mut self) {
        self.is_transitioning = false;
    }

    pub(crate) fn set_mobile(&mut self, mobile: bool) {
        self.is_mobile = mobile;
    }
}

/// Structured payload carried by each session-history entry.
///
/// Replay tolerates missing or malformed payloads by doing nothing, so
/// inbound payloads are parsed leniently from `serde_json::Value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Section id the entry navigates to
    pub section: String,
}
