//! Input dispatcher
//!
//! Normalizes pointer, keyboard, and touch input into a single
//! "navigate to section X" command. Frontends translate their raw events
//! into [`InputEvent`] values; everything else happens here.

use crate::types::SectionRegistry;

/// Horizontal displacement (in shell units) below which a touch release is
/// not considered a swipe.
pub(crate) const SWIPE_THRESHOLD: i32 = 50;

/// Keyboard shortcuts the dispatcher understands.
///
/// Enter/Space on a focused menu entry arrive as
/// [`InputEvent::MenuActivate`]; the shell resolves which entry has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    /// Digit key `1`..`9`; only ordinals within the registry navigate.
    Digit(u8),
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer click, or Enter/Space while the entry has focus.
    MenuActivate { section_id: String },
    /// Keyboard shortcut. `in_text_input` is true while focus sits inside
    /// a text-input-like control; all shortcuts are suppressed then so
    /// normal typing is never hijacked.
    Key { key: Key, in_text_input: bool },
    /// Finger down on a menu entry (visual pressed state only).
    TouchPress { section_id: String },
    /// Finger up on a menu entry.
    TouchRelease { section_id: String },
    /// Touch sequence started on the content surface at `x`.
    SwipeStart { x: i32 },
    /// Touch sequence ended on the content surface at `x`.
    SwipeEnd { x: i32 },
}

/// What an input event asks the router to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Directive {
    /// Navigate to `target`; `move_focus` also moves focus to its menu
    /// entry (arrow keys and digit shortcuts couple focus and navigation).
    Navigate { target: String, move_focus: bool },
    /// Toggle the transient pressed visual on an entry.
    SetPressed { target: String, pressed: bool },
    /// Nothing to do.
    None,
}

/// Stateful normalizer; the only state it keeps is the swipe start point.
pub(crate) struct InputDispatcher {
    swipe_start_x: Option<i32>,
}

impl InputDispatcher {
    pub(crate) fn new() -> Self {
        Self { swipe_start_x: None }
    }

    pub(crate) fn interpret(
        &mut self,
        event: InputEvent,
        registry: &SectionRegistry,
        current: &str,
    ) -> Directive {
        match event {
            InputEvent::MenuActivate { section_id } => Directive::Navigate {
                target: section_id,
                move_focus: false,
            },
            InputEvent::Key { in_text_input: true, .. } => Directive::None,
            InputEvent::Key { key, .. } => Self::interpret_key(key, registry, current),
            InputEvent::TouchPress { section_id } => Directive::SetPressed {
                target: section_id,
                pressed: true,
            },
            InputEvent::TouchRelease { section_id } => Directive::SetPressed {
                target: section_id,
                pressed: false,
            },
            InputEvent::SwipeStart { x } => {
                self.swipe_start_x = Some(x);
                Directive::None
            }
            InputEvent::SwipeEnd { x } => {
                if let Some(start) = self.swipe_start_x.take() {
                    let displacement = start - x;
                    if displacement.abs() > SWIPE_THRESHOLD {
                        // Base for future directional swipe navigation.
                    }
                }
                Directive::None
            }
        }
    }

    fn interpret_key(key: Key, registry: &SectionRegistry, current: &str) -> Directive {
        let target = match key {
            Key::ArrowUp => registry.neighbour_of(current, -1),
            Key::ArrowDown => registry.neighbour_of(current, 1),
            Key::Digit(n) => registry.by_ordinal(usize::from(n)),
        };
        target.map_or(Directive::None, |section| Directive::Navigate {
            target: section.id.clone(),
            move_focus: true,
        })
    }
}
