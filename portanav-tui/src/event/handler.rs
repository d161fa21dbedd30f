//! Event to message translation

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use portanav_core::{InputEvent, Key};

use crate::event::keymap::DEFAULT_KEYMAP;
use crate::message::AppMessage;
use crate::model::App;

const CONTENT_SCROLL_STEP: i16 = 5;

/// Poll for the next terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate one terminal event into an application message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key) => handle_key_event(&key, app),
        Event::Mouse(mouse) => handle_mouse_event(&mouse, app),
        Event::Resize(width, _) => AppMessage::Resize(width),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: &KeyEvent, app: &App) -> AppMessage {
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }
    let keymap = &DEFAULT_KEYMAP;

    if keymap.quit.matches(key) || keymap.force_quit.matches(key) {
        return AppMessage::Quit;
    }
    if keymap.back.matches(key) || keymap.back_alt.matches(key) {
        return AppMessage::HistoryBack;
    }
    if keymap.forward.matches(key) {
        return AppMessage::HistoryForward;
    }
    if keymap.prev_section.matches(key) {
        return nav_key(Key::ArrowUp);
    }
    if keymap.next_section.matches(key) {
        return nav_key(Key::ArrowDown);
    }
    if keymap.activate.matches(key) || keymap.activate_alt.matches(key) {
        return match app.shell.focused_or_active_menu() {
            Some(section_id) => AppMessage::Input(InputEvent::MenuActivate { section_id }),
            None => AppMessage::Noop,
        };
    }
    if keymap.scroll_up.matches(key) {
        return AppMessage::ScrollContent(-CONTENT_SCROLL_STEP);
    }
    if keymap.scroll_down.matches(key) {
        return AppMessage::ScrollContent(CONTENT_SCROLL_STEP);
    }

    if let crossterm::event::KeyCode::Char(c) = key.code {
        if key.modifiers.is_empty() {
            if let Some(digit) = c.to_digit(10) {
                let digit = u8::try_from(digit).unwrap_or(0);
                return nav_key(Key::Digit(digit));
            }
        }
    }

    AppMessage::Noop
}

fn nav_key(key: Key) -> AppMessage {
    AppMessage::Input(InputEvent::Key {
        key,
        // The terminal frontend has no text fields to suppress for.
        in_text_input: false,
    })
}

/// Mouse: presses over the menu mirror touch press/release, presses over
/// the content track horizontal swipes.
fn handle_mouse_event(mouse: &MouseEvent, app: &App) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match app.shell.menu_entry_at(mouse.column, mouse.row) {
                Some(section_id) => AppMessage::Input(InputEvent::TouchPress { section_id }),
                None => AppMessage::Input(InputEvent::SwipeStart {
                    x: i32::from(mouse.column),
                }),
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            match app.shell.menu_entry_at(mouse.column, mouse.row) {
                Some(section_id) => AppMessage::MenuClick { section_id },
                None => AppMessage::Input(InputEvent::SwipeEnd {
                    x: i32::from(mouse.column),
                }),
            }
        }
        MouseEventKind::ScrollUp => AppMessage::ScrollContent(-1),
        MouseEventKind::ScrollDown => AppMessage::ScrollContent(1),
        _ => AppMessage::Noop,
    }
}
