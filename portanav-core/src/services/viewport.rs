//! Viewport monitor
//!
//! Debounces resize events before re-placing the indicator, so interactive
//! window resizing does not cause a recomputation storm. Debouncing only
//! cancels earlier pending resize callbacks, never an in-flight
//! transition.

use std::time::{Duration, Instant};

use crate::services::Deferred;
use crate::utils::{Debouncer, Scheduler};

pub(crate) struct ViewportMonitor {
    debouncer: Debouncer,
}

impl ViewportMonitor {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(window),
        }
    }

    /// Note a resize; schedules `ResizeSettled` after the quiescence
    /// window, replacing any earlier pending one.
    pub(crate) fn resized(&mut self, scheduler: &mut Scheduler<Deferred>, now: Instant) {
        self.debouncer.trigger(scheduler, now, Deferred::ResizeSettled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_bursts_settle_once() {
        let mut scheduler = Scheduler::new();
        let mut monitor = ViewportMonitor::new(Duration::from_millis(250));
        let t0 = Instant::now();

        monitor.resized(&mut scheduler, t0);
        monitor.resized(&mut scheduler, t0 + Duration::from_millis(80));
        monitor.resized(&mut scheduler, t0 + Duration::from_millis(160));

        assert!(scheduler.take_due(t0 + Duration::from_millis(250)).is_empty());
        assert_eq!(
            scheduler.take_due(t0 + Duration::from_millis(410)),
            vec![Deferred::ResizeSettled]
        );
    }
}
