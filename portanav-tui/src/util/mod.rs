//! Terminal plumbing

mod terminal;

pub use terminal::{init_terminal, restore_terminal, sync_window_title, Term};
