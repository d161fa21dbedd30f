//! Accessibility announcer
//!
//! Clears the live region and re-sets it on the next pump cycle so
//! assistive technology always detects the change, even for consecutive
//! announcements of the same section. Also moves focus to the new panel's
//! heading; the content scroll reset elsewhere is the sole scroll
//! authority, so the focus move never scrolls.

use std::time::Instant;

use crate::services::Deferred;
use crate::traits::PresentationShell;
use crate::types::Section;
use crate::utils::Scheduler;

pub(crate) struct Announcer;

impl Announcer {
    pub(crate) fn announce(
        shell: &dyn PresentationShell,
        scheduler: &mut Scheduler<Deferred>,
        now: Instant,
        section: &Section,
    ) {
        shell.set_live_region("");
        scheduler.schedule_next_frame(
            now,
            Deferred::SetLiveRegion {
                text: format!("Sección: {}", section.accessible_label),
            },
        );
        if !shell.focus_heading(&section.id) {
            log::debug!("no heading to focus for section '{}'", section.id);
        }
    }
}
