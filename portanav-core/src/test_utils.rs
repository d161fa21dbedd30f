//! Test helper module
//!
//! Mock implementations of the presentation and history traits plus
//! factory helpers for a ready-to-drive router.

use std::sync::{Arc, Mutex};

use crate::services::{Router, RouterConfig};
use crate::traits::{HistoryStore, PresentationShell};
use crate::types::{HistoryEntry, SectionRegistry};

// ===== MockShell =====

/// Observable state of the mock shell at one point in time.
#[derive(Debug, Clone, Default)]
pub struct ShellSnapshot {
    pub active_menu: Option<String>,
    pub active_panels: Vec<String>,
    pub indicator_offset: Option<u16>,
    pub indicator_hidden: bool,
    pub title: String,
    /// Every write to the live region, in order (including clears).
    pub live_region_writes: Vec<String>,
    pub focused_menu: Option<String>,
    pub focused_heading: Option<String>,
    pub pressed: Option<String>,
    pub scroll_resets: usize,
}

struct MockShellState {
    menu_ids: Vec<String>,
    panel_ids: Vec<String>,
    initial_panel: Option<String>,
    viewport_width: u16,
    snapshot: ShellSnapshot,
}

/// Recording [`PresentationShell`] backed by the portfolio registry.
pub struct MockShell {
    inner: Mutex<MockShellState>,
}

impl MockShell {
    /// Shell exposing one menu entry and one panel per portfolio section,
    /// on a desktop-width viewport.
    pub fn portfolio() -> Self {
        let ids: Vec<String> = SectionRegistry::portfolio()
            .iter()
            .map(|s| s.id.clone())
            .collect();
        Self {
            inner: Mutex::new(MockShellState {
                menu_ids: ids.clone(),
                panel_ids: ids,
                initial_panel: Some("inicio".into()),
                viewport_width: 1280,
                snapshot: ShellSnapshot::default(),
            }),
        }
    }

    /// Shell with no menu entries and no panels (initialization failure).
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(MockShellState {
                menu_ids: Vec::new(),
                panel_ids: Vec::new(),
                initial_panel: None,
                viewport_width: 1280,
                snapshot: ShellSnapshot::default(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockShellState> {
        self.inner.lock().unwrap()
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        self.lock().snapshot.clone()
    }

    pub fn set_viewport_width(&self, width: u16) {
        self.lock().viewport_width = width;
    }

    /// Deterministic per-entry offset: two rows per preceding entry.
    pub fn offset_of(&self, id: &str) -> Option<u16> {
        let state = self.lock();
        state
            .menu_ids
            .iter()
            .position(|m| m == id)
            .map(|i| u16::try_from(i * 2).unwrap_or(u16::MAX))
    }

    /// Simulate an absent DOM target for one section's panel.
    pub fn remove_panel(&self, id: &str) {
        self.lock().panel_ids.retain(|p| p != id);
    }

    /// Forget the recorded indicator position (not its visibility).
    pub fn clear_indicator(&self) {
        self.lock().snapshot.indicator_offset = None;
    }
}

impl PresentationShell for MockShell {
    fn menu_entry_ids(&self) -> Vec<String> {
        self.lock().menu_ids.clone()
    }

    fn panel_ids(&self) -> Vec<String> {
        self.lock().panel_ids.clone()
    }

    fn initial_panel(&self) -> Option<String> {
        self.lock().initial_panel.clone()
    }

    fn set_active_menu_entry(&self, id: &str) -> bool {
        let mut state = self.lock();
        if !state.menu_ids.iter().any(|m| m == id) {
            return false;
        }
        state.snapshot.active_menu = Some(id.to_string());
        true
    }

    fn deactivate_panels(&self) {
        self.lock().snapshot.active_panels.clear();
    }

    fn activate_panel(&self, id: &str) -> bool {
        let mut state = self.lock();
        if !state.panel_ids.iter().any(|p| p == id) {
            return false;
        }
        state.snapshot.active_panels.push(id.to_string());
        true
    }

    fn menu_entry_offset(&self, id: &str) -> Option<u16> {
        self.offset_of(id)
    }

    fn set_indicator_offset(&self, offset: u16) {
        self.lock().snapshot.indicator_offset = Some(offset);
    }

    fn set_indicator_hidden(&self, hidden: bool) {
        self.lock().snapshot.indicator_hidden = hidden;
    }

    fn viewport_width(&self) -> u16 {
        self.lock().viewport_width
    }

    fn scroll_content_to_top(&self) {
        self.lock().snapshot.scroll_resets += 1;
    }

    fn set_document_title(&self, title: &str) {
        self.lock().snapshot.title = title.to_string();
    }

    fn set_live_region(&self, text: &str) {
        self.lock().snapshot.live_region_writes.push(text.to_string());
    }

    fn focus_heading(&self, id: &str) -> bool {
        let mut state = self.lock();
        if !state.panel_ids.iter().any(|p| p == id) {
            return false;
        }
        state.snapshot.focused_heading = Some(id.to_string());
        true
    }

    fn focus_menu_entry(&self, id: &str) {
        self.lock().snapshot.focused_menu = Some(id.to_string());
    }

    fn set_menu_entry_pressed(&self, id: &str, pressed: bool) {
        let mut state = self.lock();
        state.snapshot.pressed = pressed.then(|| id.to_string());
    }
}

// ===== MockHistory =====

/// Recording [`HistoryStore`] with an optional startup fragment.
pub struct MockHistory {
    initial_fragment: Option<String>,
    pushes: Mutex<Vec<(HistoryEntry, String)>>,
}

impl MockHistory {
    pub fn new(initial_fragment: Option<String>) -> Self {
        Self {
            initial_fragment,
            pushes: Mutex::new(Vec::new()),
        }
    }

    pub fn pushes(&self) -> Vec<(HistoryEntry, String)> {
        self.pushes.lock().unwrap().clone()
    }
}

impl HistoryStore for MockHistory {
    fn push(&self, entry: &HistoryEntry, fragment: &str) {
        self.pushes
            .lock()
            .unwrap()
            .push((entry.clone(), fragment.to_string()));
    }

    fn initial_fragment(&self) -> Option<String> {
        self.initial_fragment.clone()
    }
}

// ===== Factories =====

/// Router over the portfolio registry with a fresh mock shell and history.
pub fn portfolio_router() -> (Router, Arc<MockShell>, Arc<MockHistory>) {
    let shell = Arc::new(MockShell::portfolio());
    let history = Arc::new(MockHistory::new(None));
    let router = router_with(shell.clone(), history.clone());
    (router, shell, history)
}

pub fn router_with(shell: Arc<MockShell>, history: Arc<MockHistory>) -> Router {
    Router::new(
        SectionRegistry::portfolio(),
        shell,
        history,
        RouterConfig::default(),
    )
    .expect("mock shell exposes menu entries and panels")
}
