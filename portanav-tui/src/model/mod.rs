//! Application state

mod app;
mod content;
mod history;
mod shell;

pub use app::{App, UiTask, LOADER_FADE, TOAST_VISIBLE};
pub use content::{menu_label, section_body};
pub use history::SessionHistory;
pub use shell::{ShellView, TerminalShell};
