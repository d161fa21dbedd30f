//! Portanav Core Library
//!
//! Navigation state machine for a single-page portfolio interface:
//! - Section registry and navigation state (single source of truth)
//! - Transition controller (mutual-exclusion lock, settle delay)
//! - History synchronizer (session history / fragment round-trip)
//! - Input dispatcher (pointer, keyboard, touch normalization)
//! - Accessibility announcer and indicator positioner
//!
//! This library is platform-independent: the presentation surface and the
//! session history are abstracted through traits, so the same state machine
//! drives the terminal frontend and any future shell.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{NavError, NavResult};
pub use services::{InputEvent, Key, NavOutcome, Router, RouterConfig};
pub use traits::{HistoryStore, PresentationShell};
pub use types::{HistoryEntry, NavigationState, Origin, Section, SectionRegistry};
