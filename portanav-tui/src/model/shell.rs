//! Terminal presentation shell
//!
//! Implements the presentation side of the navigation contract on top of
//! plain widget state. The view reads a [`ShellView`] snapshot each frame
//! and writes the laid-out menu geometry back, so indicator placement
//! always works from post-layout offsets.

use std::sync::{Mutex, MutexGuard};

use portanav_core::{PresentationShell, SectionRegistry};

/// One frame's worth of shell state, cloned out for rendering.
#[derive(Debug, Clone, Default)]
pub struct ShellView {
    pub menu_ids: Vec<String>,
    pub active_menu: Option<String>,
    pub focused_menu: Option<String>,
    pub pressed_menu: Option<String>,
    pub active_panels: Vec<String>,
    pub indicator_offset: u16,
    pub indicator_hidden: bool,
    pub document_title: String,
    pub live_region: String,
    pub focused_heading: Option<String>,
    pub scroll_offset: u16,
}

struct ShellState {
    view: ShellView,
    panel_ids: Vec<String>,
    initial_panel: String,
    /// Menu rows recorded by the view after layout, terminal-absolute.
    menu_offsets: Vec<(String, u16)>,
    /// Menu hit boxes recorded by the view: (id, x, y, width, height).
    menu_areas: Vec<(String, u16, u16, u16, u16)>,
    viewport_width: u16,
}

/// Shared shell handle; the router and the view both hold one.
pub struct TerminalShell {
    inner: Mutex<ShellState>,
}

impl TerminalShell {
    pub fn new(registry: &SectionRegistry, initial_panel: &str, viewport_width: u16) -> Self {
        let ids: Vec<String> = registry.iter().map(|s| s.id.clone()).collect();
        // Until the first draw, assume one row per entry below the border.
        let menu_offsets = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), u16::try_from(i).unwrap_or(u16::MAX).saturating_add(2)))
            .collect();
        Self {
            inner: Mutex::new(ShellState {
                view: ShellView {
                    menu_ids: ids.clone(),
                    ..ShellView::default()
                },
                panel_ids: ids,
                initial_panel: initial_panel.to_string(),
                menu_offsets,
                menu_areas: Vec::new(),
                viewport_width,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ShellState> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn view(&self) -> ShellView {
        self.lock().view.clone()
    }

    pub fn set_viewport_width(&self, width: u16) {
        self.lock().viewport_width = width;
    }

    /// Called by the view once the menu is laid out.
    pub fn record_menu_area(&self, id: &str, x: u16, y: u16, width: u16, height: u16) {
        let mut state = self.lock();
        state.menu_offsets.retain(|(m, _)| m != id);
        state.menu_offsets.push((id.to_string(), y));
        state.menu_areas.retain(|(m, ..)| m != id);
        state.menu_areas.push((id.to_string(), x, y, width, height));
    }

    /// Which menu entry covers a terminal cell, if any.
    pub fn menu_entry_at(&self, column: u16, row: u16) -> Option<String> {
        self.lock()
            .menu_areas
            .iter()
            .find(|(_, x, y, w, h)| {
                column >= *x && column < x.saturating_add(*w) && row >= *y && row < y.saturating_add(*h)
            })
            .map(|(id, ..)| id.clone())
    }

    pub fn focused_or_active_menu(&self) -> Option<String> {
        let state = self.lock();
        state
            .view
            .focused_menu
            .clone()
            .or_else(|| state.view.active_menu.clone())
    }

    pub fn scroll_by(&self, delta: i16) {
        let mut state = self.lock();
        let current = i32::from(state.view.scroll_offset);
        let next = current.saturating_add(i32::from(delta)).max(0);
        state.view.scroll_offset = u16::try_from(next).unwrap_or(u16::MAX);
    }
}

impl PresentationShell for TerminalShell {
    fn menu_entry_ids(&self) -> Vec<String> {
        self.lock().view.menu_ids.clone()
    }

    fn panel_ids(&self) -> Vec<String> {
        self.lock().panel_ids.clone()
    }

    fn initial_panel(&self) -> Option<String> {
        Some(self.lock().initial_panel.clone())
    }

    fn set_active_menu_entry(&self, id: &str) -> bool {
        let mut state = self.lock();
        if !state.view.menu_ids.iter().any(|m| m == id) {
            return false;
        }
        state.view.active_menu = Some(id.to_string());
        true
    }

    fn deactivate_panels(&self) {
        self.lock().view.active_panels.clear();
    }

    fn activate_panel(&self, id: &str) -> bool {
        let mut state = self.lock();
        if !state.panel_ids.iter().any(|p| p == id) {
            return false;
        }
        state.view.active_panels.push(id.to_string());
        true
    }

    fn menu_entry_offset(&self, id: &str) -> Option<u16> {
        self.lock()
            .menu_offsets
            .iter()
            .find(|(m, _)| m == id)
            .map(|(_, offset)| *offset)
    }

    fn set_indicator_offset(&self, offset: u16) {
        self.lock().view.indicator_offset = offset;
    }

    fn set_indicator_hidden(&self, hidden: bool) {
        self.lock().view.indicator_hidden = hidden;
    }

    fn viewport_width(&self) -> u16 {
        self.lock().viewport_width
    }

    fn scroll_content_to_top(&self) {
        self.lock().view.scroll_offset = 0;
    }

    fn set_document_title(&self, title: &str) {
        self.lock().view.document_title = title.to_string();
    }

    fn set_live_region(&self, text: &str) {
        self.lock().view.live_region = text.to_string();
    }

    fn focus_heading(&self, id: &str) -> bool {
        let mut state = self.lock();
        if !state.panel_ids.iter().any(|p| p == id) {
            return false;
        }
        state.view.focused_heading = Some(id.to_string());
        true
    }

    fn focus_menu_entry(&self, id: &str) {
        self.lock().view.focused_menu = Some(id.to_string());
    }

    fn set_menu_entry_pressed(&self, id: &str, pressed: bool) {
        let mut state = self.lock();
        if pressed {
            state.view.pressed_menu = Some(id.to_string());
        } else if state.view.pressed_menu.as_deref() == Some(id) {
            state.view.pressed_menu = None;
        }
    }
}
