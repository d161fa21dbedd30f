//! Application messages
//!
//! Everything the event layer can ask the update layer to do.

use portanav_core::InputEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Exit the application
    Quit,
    /// Forward one normalized event to the navigation core
    Input(InputEvent),
    /// A click resolved over a menu entry: release then activate
    MenuClick { section_id: String },
    /// Step back through the session history
    HistoryBack,
    /// Step forward through the session history
    HistoryForward,
    /// Terminal was resized to this many columns
    Resize(u16),
    /// Scroll the content panel by this many rows
    ScrollContent(i16),
    /// Nothing to do
    Noop,
}
