//! Presentation and history abstraction trait definition

mod history;
mod presentation;

pub use history::HistoryStore;
pub use presentation::PresentationShell;
