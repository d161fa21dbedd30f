//! Core data model: sections, registry, navigation state

mod registry;
mod section;
mod state;

pub use registry::SectionRegistry;
pub use section::{Origin, Section};
pub use state::{HistoryEntry, NavigationState};
