//! Scheduling primitives for the single-threaded event loop

mod debounce;
mod schedule;

pub use debounce::Debouncer;
pub use schedule::{Scheduler, TaskToken};
