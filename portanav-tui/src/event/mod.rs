//! Event handling

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::{KeyBinding, DEFAULT_KEYMAP};
