//! Presentation shell abstract Trait

/// Presentation surface the router drives.
///
/// The shell owns, for each section, exactly one menu entry and one panel,
/// both addressable by the section id, plus a scrollable content container
/// and one indicator element. The core never creates or destroys these
/// elements; it only toggles their state.
///
/// Platform implementation:
/// - TUI: `TerminalShell` (ratatui view model)
pub trait PresentationShell: Send + Sync {
    /// Ids of all menu entries the shell exposes, in display order.
    fn menu_entry_ids(&self) -> Vec<String>;

    /// Ids of all panels the shell exposes.
    fn panel_ids(&self) -> Vec<String>;

    /// Panel the shell declares initially active, if any.
    fn initial_panel(&self) -> Option<String>;

    /// Mark exactly one menu entry active (clearing all others).
    ///
    /// Returns `false` when no entry with this id exists.
    fn set_active_menu_entry(&self, id: &str) -> bool;

    /// Remove the active mark from every panel.
    fn deactivate_panels(&self);

    /// Mark one panel active.
    ///
    /// Returns `false` when no panel with this id exists; the caller skips
    /// the rest of the activation step but must still release its lock.
    fn activate_panel(&self, id: &str) -> bool;

    /// Vertical offset of a menu entry within its container, as of the
    /// most recent layout pass.
    fn menu_entry_offset(&self, id: &str) -> Option<u16>;

    /// Move the indicator to a vertical offset.
    fn set_indicator_offset(&self, offset: u16);

    /// Hide or show the indicator.
    fn set_indicator_hidden(&self, hidden: bool);

    /// Current viewport width, compared against the mobile breakpoint.
    fn viewport_width(&self) -> u16;

    /// Reset the content container's scroll offset to the top.
    fn scroll_content_to_top(&self);

    /// Set the document/tab title.
    fn set_document_title(&self, title: &str);

    /// Replace the live region's text (assistive technology watches this).
    fn set_live_region(&self, text: &str);

    /// Move input focus to a panel's primary heading without scrolling.
    ///
    /// Returns `false` when the heading is absent.
    fn focus_heading(&self, id: &str) -> bool;

    /// Move input focus to a menu entry.
    fn focus_menu_entry(&self, id: &str);

    /// Toggle the transient pressed visual on a menu entry.
    fn set_menu_entry_pressed(&self, id: &str, pressed: bool);
}
