//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One chord: a key code plus required modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.code == self.code && event.modifiers == self.modifiers
    }
}

/// Default bindings for everything that is not a section shortcut.
pub struct DefaultKeymap {
    pub quit: KeyBinding,
    pub force_quit: KeyBinding,
    pub back: KeyBinding,
    pub back_alt: KeyBinding,
    pub forward: KeyBinding,
    pub prev_section: KeyBinding,
    pub next_section: KeyBinding,
    pub activate: KeyBinding,
    pub activate_alt: KeyBinding,
    pub scroll_up: KeyBinding,
    pub scroll_down: KeyBinding,
}

pub const DEFAULT_KEYMAP: DefaultKeymap = DefaultKeymap {
    quit: KeyBinding::new(KeyCode::Char('q'), KeyModifiers::ALT),
    force_quit: KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    back: KeyBinding::new(KeyCode::Esc, KeyModifiers::NONE),
    back_alt: KeyBinding::new(KeyCode::Left, KeyModifiers::ALT),
    forward: KeyBinding::new(KeyCode::Right, KeyModifiers::ALT),
    prev_section: KeyBinding::new(KeyCode::Up, KeyModifiers::NONE),
    next_section: KeyBinding::new(KeyCode::Down, KeyModifiers::NONE),
    activate: KeyBinding::new(KeyCode::Enter, KeyModifiers::NONE),
    activate_alt: KeyBinding::new(KeyCode::Char(' '), KeyModifiers::NONE),
    scroll_up: KeyBinding::new(KeyCode::PageUp, KeyModifiers::NONE),
    scroll_down: KeyBinding::new(KeyCode::PageDown, KeyModifiers::NONE),
};
