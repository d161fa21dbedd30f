//! Generic debounce primitive
//!
//! Collapses bursts of triggers into a single task scheduled after a
//! quiescence window. Each trigger cancels the previously pending task
//! only; it never touches anything else in the queue.

use std::time::{Duration, Instant};

use crate::utils::{Scheduler, TaskToken};

/// Higher-order scheduling helper parameterized by a quiescence window.
pub struct Debouncer {
    window: Duration,
    pending: Option<TaskToken>,
}

impl Debouncer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Schedule `task` after the quiescence window, replacing any pending
    /// task from an earlier trigger.
    pub fn trigger<T>(&mut self, scheduler: &mut Scheduler<T>, now: Instant, task: T) -> TaskToken {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
        let token = scheduler.schedule_after(now, self.window, task);
        self.pending = Some(token);
        token
    }
}
