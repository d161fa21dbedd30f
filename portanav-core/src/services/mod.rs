//! Navigation service layer
//!
//! The [`Router`] is the single place that mutates [`crate::NavigationState`];
//! the input-listener adapters in the frontend only produce events for it.

mod announcer;
mod history;
mod indicator;
mod input;
mod router;
mod viewport;

pub use input::{InputEvent, Key};
pub use router::{NavOutcome, Router, RouterConfig};

pub(crate) use announcer::Announcer;
pub(crate) use history::HistorySynchronizer;
pub(crate) use indicator::IndicatorPositioner;
pub(crate) use input::{Directive, InputDispatcher};
pub(crate) use router::Deferred;
pub(crate) use viewport::ViewportMonitor;
