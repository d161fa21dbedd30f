//! Section definition and navigation origin

/// Where a navigate call came from.
///
/// History-replay navigations must never push a new history entry, and
/// they re-apply visual state even when the target equals the current
/// section (needed after a reload where the shell default differs from
/// the fragment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Direct user input (pointer, keyboard, touch)
    User,
    /// Restored from session history (back/forward, initial fragment)
    HistoryReplay,
}

/// One named content panel the interface can display.
///
/// Sections are defined once at startup and never created or destroyed
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Unique string key, also used as the fragment identifier
    pub id: String,
    /// String shown in the page/tab title when the section is active
    pub display_title: String,
    /// String used in the live-region announcement
    pub accessible_label: String,
    /// 1-based position, used for numeric-shortcut lookup
    pub order: usize,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        display_title: impl Into<String>,
        accessible_label: impl Into<String>,
        order: usize,
    ) -> Self {
        Self {
            id: id.into(),
            display_title: display_title.into(),
            accessible_label: accessible_label.into(),
            order,
        }
    }
}
