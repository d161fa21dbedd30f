//! Session history abstract Trait

use crate::types::HistoryEntry;

/// Outbound half of the history bridge.
///
/// User-originated navigations push entries here; back/forward events flow
/// the other way, into [`crate::Router::handle_pop`], carrying the restored
/// payload.
///
/// Platform implementation:
/// - TUI: `SessionHistory` (in-memory entry list with a cursor)
pub trait HistoryStore: Send + Sync {
    /// Push a new entry carrying a structured payload and set the fragment.
    fn push(&self, entry: &HistoryEntry, fragment: &str);

    /// Fragment identifier present when the session started (with or
    /// without the leading `#`), if any.
    fn initial_fragment(&self) -> Option<String>;
}
