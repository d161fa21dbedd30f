//! Indicator positioner
//!
//! Computes and applies the position of the active-section marker. The
//! offset read is deferred to the next pump cycle so it reflects the most
//! recent layout pass; the entry may have just changed active state, which
//! affects its own metrics.

use std::time::Instant;

use crate::error::NavError;
use crate::services::Deferred;
use crate::traits::PresentationShell;
use crate::types::NavigationState;
use crate::utils::Scheduler;

pub(crate) struct IndicatorPositioner {
    mobile_breakpoint: u16,
}

impl IndicatorPositioner {
    pub(crate) fn new(mobile_breakpoint: u16) -> Self {
        Self { mobile_breakpoint }
    }

    /// Re-evaluate the viewport class and either hide the indicator
    /// (mobile) or defer a read-then-write of the entry offset (desktop).
    pub(crate) fn place(
        &self,
        shell: &dyn PresentationShell,
        scheduler: &mut Scheduler<Deferred>,
        now: Instant,
        state: &mut NavigationState,
        target: &str,
    ) {
        let mobile = shell.viewport_width() <= self.mobile_breakpoint;
        state.set_mobile(mobile);

        if mobile {
            shell.set_indicator_hidden(true);
        } else {
            scheduler.schedule_next_frame(
                now,
                Deferred::PlaceIndicator {
                    target: target.to_string(),
                },
            );
        }
    }

    /// Deferred half: read the entry offset and move the indicator.
    pub(crate) fn apply(&self, shell: &dyn PresentationShell, target: &str) {
        match shell.menu_entry_offset(target) {
            Some(offset) => {
                shell.set_indicator_offset(offset);
                shell.set_indicator_hidden(false);
            }
            None => {
                log::warn!(
                    "indicator not moved: {}",
                    NavError::MissingElement(format!("menu entry '{target}'"))
                );
            }
        }
    }
}
