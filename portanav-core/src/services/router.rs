//! Navigation router
//!
//! Owns the navigation state and orchestrates the transition sequence:
//! input dispatch, the hide/show panel swap under the transition lock,
//! history recording, indicator placement, and the accessibility
//! announcement. All deferral goes through one scheduler that the
//! frontend pumps once per loop iteration.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{NavError, NavResult};
use crate::services::{
    Announcer, Directive, HistorySynchronizer, IndicatorPositioner, InputDispatcher, InputEvent,
    ViewportMonitor,
};
use crate::traits::{HistoryStore, PresentationShell};
use crate::types::{NavigationState, Origin, SectionRegistry};
use crate::utils::Scheduler;

/// Delay between panel deactivation and activation, letting exit styling
/// resolve before the target becomes visible.
pub(crate) const SETTLE_DELAY: Duration = Duration::from_millis(50);
/// Canonical mobile breakpoint; frontends may override per medium.
pub(crate) const MOBILE_BREAKPOINT: u16 = 768;
/// Quiescence window for resize debouncing.
pub(crate) const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
/// Title used when a section carries no display title of its own.
pub(crate) const BASE_TITLE: &str = "Luis San Martín | Portafolio TI";

/// Tunable router parameters.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub settle_delay: Duration,
    pub mobile_breakpoint: u16,
    pub resize_debounce: Duration,
    pub base_title: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            settle_delay: SETTLE_DELAY,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            resize_debounce: RESIZE_DEBOUNCE,
            base_title: BASE_TITLE.to_string(),
        }
    }
}

/// What became of a navigate call. Callers are free to discard it; the
/// router never surfaces these as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Transition started; it completes on a later pump.
    Started,
    /// Dropped because a transition was already in flight (not queued).
    DroppedBusy,
    /// Target id is not in the registry; nothing changed.
    UnknownSection,
    /// Target equals the current section for a user navigation; no-op.
    AlreadyCurrent,
}

/// Continuations the router schedules for later pump cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Deferred {
    /// Settle delay elapsed: activate the target and release the lock.
    CompleteTransition { target: String },
    /// Read the entry offset (post-layout) and move the indicator.
    PlaceIndicator { target: String },
    /// Re-set the live region after the clearing write.
    SetLiveRegion { text: String },
    /// Resize quiescence window elapsed.
    ResizeSettled,
}

/// The navigation state machine.
pub struct Router {
    registry: SectionRegistry,
    state: NavigationState,
    shell: Arc<dyn PresentationShell>,
    config: RouterConfig,
    scheduler: Scheduler<Deferred>,
    input: InputDispatcher,
    indicator: IndicatorPositioner,
    history: HistorySynchronizer,
    viewport: ViewportMonitor,
}

impl Router {
    /// Construct the router.
    ///
    /// Fails with [`NavError::InitializationFailed`] when the shell
    /// exposes no menu entries or no panels; navigation cannot function
    /// and no partial setup is performed.
    pub fn new(
        registry: SectionRegistry,
        shell: Arc<dyn PresentationShell>,
        history: Arc<dyn HistoryStore>,
        config: RouterConfig,
    ) -> NavResult<Self> {
        if shell.menu_entry_ids().is_empty() || shell.panel_ids().is_empty() {
            return Err(NavError::InitializationFailed);
        }

        let default = shell
            .initial_panel()
            .filter(|id| registry.get(id).is_some())
            .or_else(|| registry.first().map(|s| s.id.clone()))
            .ok_or(NavError::InitializationFailed)?;

        let indicator = IndicatorPositioner::new(config.mobile_breakpoint);
        let viewport = ViewportMonitor::new(config.resize_debounce);

        Ok(Self {
            registry,
            state: NavigationState::new(default),
            shell,
            config,
            scheduler: Scheduler::new(),
            input: InputDispatcher::new(),
            indicator,
            history: HistorySynchronizer::new(history),
            viewport,
        })
    }

    /// Initial-load wiring: place the indicator for the default section,
    /// replay the startup fragment if it names a different known section,
    /// and set the document title for the default.
    pub fn init(&mut self, now: Instant) {
        let current = self.state.current_section_id().to_string();
        self.shell.set_active_menu_entry(&current);
        self.indicator.place(
            self.shell.as_ref(),
            &mut self.scheduler,
            now,
            &mut self.state,
            &current,
        );

        if let Some(target) = self.history.startup_target(&self.registry, &current) {
            self.navigate(&target, Origin::HistoryReplay, now);
        }

        self.shell.set_document_title(&self.title_for(&current));
    }

    /// Navigate to a section. Returns before the sequence completes; the
    /// activation half runs on a later [`Router::pump`].
    pub fn navigate(&mut self, section_id: &str, origin: Origin, now: Instant) -> NavOutcome {
        let Some(section) = self.registry.get(section_id) else {
            log::debug!(
                "navigate ignored: {}",
                NavError::UnknownSection(section_id.to_string())
            );
            return NavOutcome::UnknownSection;
        };
        if self.state.is_transitioning() {
            log::debug!("navigate dropped, transition in flight (target '{section_id}')");
            return NavOutcome::DroppedBusy;
        }
        if section.id == self.state.current_section_id() && origin == Origin::User {
            return NavOutcome::AlreadyCurrent;
        }
        let target = section.id.clone();

        if !self.shell.set_active_menu_entry(&target) {
            log::warn!(
                "menu not updated: {}",
                NavError::MissingElement(format!("menu entry '{target}'"))
            );
        }
        self.indicator.place(
            self.shell.as_ref(),
            &mut self.scheduler,
            now,
            &mut self.state,
            &target,
        );

        // History replay must not create new entries.
        if origin == Origin::User {
            self.history.record(&target);
        }

        self.state.begin_transition();
        self.shell.deactivate_panels();
        self.scheduler.schedule_after(
            now,
            self.config.settle_delay,
            Deferred::CompleteTransition { target },
        );
        NavOutcome::Started
    }

    /// Feed one normalized input event through the dispatcher.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> Option<NavOutcome> {
        let current = self.state.current_section_id().to_string();
        match self.input.interpret(event, &self.registry, &current) {
            Directive::Navigate { target, move_focus } => {
                if move_focus {
                    self.shell.focus_menu_entry(&target);
                }
                Some(self.navigate(&target, Origin::User, now))
            }
            Directive::SetPressed { target, pressed } => {
                self.shell.set_menu_entry_pressed(&target, pressed);
                None
            }
            Directive::None => None,
        }
    }

    /// A back/forward event restored `payload`; replay it if it carries a
    /// known section. Missing or malformed payloads do nothing.
    pub fn handle_pop(
        &mut self,
        payload: Option<&serde_json::Value>,
        now: Instant,
    ) -> Option<NavOutcome> {
        let target = HistorySynchronizer::replay_target(payload, &self.registry)?;
        Some(self.navigate(&target, Origin::HistoryReplay, now))
    }

    /// The viewport was resized; re-place the indicator once resizing
    /// quiets down.
    pub fn handle_resize(&mut self, now: Instant) {
        self.viewport.resized(&mut self.scheduler, now);
    }

    /// Run every continuation that has come due. Call once per frontend
    /// loop iteration, after drawing; tasks scheduled during a pump wait
    /// for the next one.
    pub fn pump(&mut self, now: Instant) {
        for task in self.scheduler.take_due(now) {
            match task {
                Deferred::CompleteTransition { target } => self.complete_transition(&target, now),
                Deferred::PlaceIndicator { target } => {
                    self.indicator.apply(self.shell.as_ref(), &target);
                }
                Deferred::SetLiveRegion { text } => self.shell.set_live_region(&text),
                Deferred::ResizeSettled => {
                    let current = self.state.current_section_id().to_string();
                    self.indicator.place(
                        self.shell.as_ref(),
                        &mut self.scheduler,
                        now,
                        &mut self.state,
                        &current,
                    );
                }
            }
        }
    }

    /// True while any continuation is still pending; frontends can keep
    /// ticking until the queue drains.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.scheduler.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Activation half of the transition, run after the settle delay.
    /// A missing panel aborts the activation step but always releases the
    /// lock, so a transition can never stay stuck.
    fn complete_transition(&mut self, target: &str, now: Instant) {
        if self.shell.activate_panel(target) {
            self.state.set_current_section(target);
            self.shell.set_document_title(&self.title_for(target));
            if let Some(section) = self.registry.get(target) {
                Announcer::announce(self.shell.as_ref(), &mut self.scheduler, now, section);
            }
            self.shell.scroll_content_to_top();
        } else {
            log::warn!(
                "activation skipped: {}",
                NavError::MissingElement(format!("panel '{target}'"))
            );
        }
        self.state.end_transition();
    }

    fn title_for(&self, section_id: &str) -> String {
        self.registry
            .get(section_id)
            .map_or_else(|| self.config.base_title.clone(), |s| s.display_title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Key;
    use crate::test_utils::{portfolio_router, router_with, MockHistory, MockShell};

    const STEP: Duration = Duration::from_millis(60);

    fn settle(router: &mut Router, mut now: Instant) -> Instant {
        // Two pumps: one for the settle delay, one for the next-frame
        // continuations it scheduled.
        now += STEP;
        router.pump(now);
        now += STEP;
        router.pump(now);
        now
    }

    #[test]
    fn user_navigation_swaps_exactly_one_panel() {
        let (mut router, shell, _history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);

        assert_eq!(
            router.navigate("servicios", Origin::User, t0),
            NavOutcome::Started
        );
        // Old panel is already gone, new one not yet active.
        assert!(shell.snapshot().active_panels.is_empty());
        assert!(router.state().is_transitioning());

        settle(&mut router, t0);

        let snapshot = shell.snapshot();
        assert_eq!(snapshot.active_panels, vec!["servicios".to_string()]);
        assert_eq!(router.state().current_section_id(), "servicios");
        assert!(!router.state().is_transitioning());
        assert_eq!(snapshot.title, "Servicios | Luis San Martín");
        assert_eq!(snapshot.scroll_resets, 1);
    }

    #[test]
    fn requests_during_a_transition_are_dropped_not_queued() {
        let (mut router, shell, _history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);

        assert_eq!(
            router.navigate("servicios", Origin::User, t0),
            NavOutcome::Started
        );
        assert_eq!(
            router.navigate("contacto", Origin::User, t0),
            NavOutcome::DroppedBusy
        );
        assert_eq!(
            router.navigate("educacion", Origin::HistoryReplay, t0),
            NavOutcome::DroppedBusy
        );

        settle(&mut router, t0);

        // Only the in-flight transition completed; nothing ran afterwards.
        assert_eq!(router.state().current_section_id(), "servicios");
        assert_eq!(shell.snapshot().active_panels, vec!["servicios".to_string()]);
        assert!(!router.has_pending_work());
    }

    #[test]
    fn same_section_user_navigation_is_a_no_op() {
        let (mut router, shell, history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);
        let writes_before = shell.snapshot().live_region_writes.len();

        assert_eq!(
            router.navigate("inicio", Origin::User, t0),
            NavOutcome::AlreadyCurrent
        );
        assert!(history.pushes().is_empty());
        assert_eq!(shell.snapshot().live_region_writes.len(), writes_before);
    }

    #[test]
    fn replay_to_the_current_section_reapplies_visuals_without_pushing() {
        let (mut router, shell, history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);

        assert_eq!(
            router.navigate("inicio", Origin::HistoryReplay, t0),
            NavOutcome::Started
        );
        settle(&mut router, t0);

        assert!(history.pushes().is_empty());
        let snapshot = shell.snapshot();
        assert_eq!(snapshot.active_panels, vec!["inicio".to_string()]);
        // The announcement re-ran: cleared, then re-set.
        assert_eq!(
            snapshot.live_region_writes.last().map(String::as_str),
            Some("Sección: Perfil profesional")
        );
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let (mut router, shell, history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);
        let now = settle(&mut router, t0);
        let title_before = shell.snapshot().title.clone();
        let offset_before = shell.snapshot().indicator_offset;

        assert_eq!(
            router.navigate("doesnotexist", Origin::User, now),
            NavOutcome::UnknownSection
        );
        settle(&mut router, now);

        assert_eq!(router.state().current_section_id(), "inicio");
        assert_eq!(shell.snapshot().title, title_before);
        assert_eq!(shell.snapshot().indicator_offset, offset_before);
        assert!(history.pushes().is_empty());
    }

    #[test]
    fn history_round_trip_restores_section_title_and_indicator() {
        let (mut router, shell, history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);
        let mut now = settle(&mut router, t0);

        router.navigate("experiencia", Origin::User, now);
        now = settle(&mut router, now);
        let offset_a = shell.snapshot().indicator_offset;
        assert_eq!(offset_a, shell.offset_of("experiencia"));

        router.navigate("contacto", Origin::User, now);
        now = settle(&mut router, now);
        assert_eq!(history.pushes().len(), 2);

        // Synthesized back event restores the previous entry's payload.
        let payload = serde_json::json!({ "section": "experiencia" });
        assert_eq!(
            router.handle_pop(Some(&payload), now),
            Some(NavOutcome::Started)
        );
        settle(&mut router, now);

        let snapshot = shell.snapshot();
        assert_eq!(router.state().current_section_id(), "experiencia");
        assert_eq!(snapshot.title, "Experiencia | Luis San Martín");
        assert_eq!(snapshot.indicator_offset, offset_a);
        // Replay pushed nothing.
        assert_eq!(history.pushes().len(), 2);
    }

    #[test]
    fn malformed_pop_payloads_do_nothing() {
        let (mut router, _shell, _history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);

        assert_eq!(router.handle_pop(None, t0), None);
        let bad = serde_json::json!({ "page": 3 });
        assert_eq!(router.handle_pop(Some(&bad), t0), None);
        assert_eq!(router.state().current_section_id(), "inicio");
    }

    #[test]
    fn digit_five_reaches_educacion_with_title_history_and_indicator() {
        let (mut router, shell, history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);
        let now = settle(&mut router, t0);

        let outcome = router.handle_input(
            InputEvent::Key {
                key: Key::Digit(5),
                in_text_input: false,
            },
            now,
        );
        assert_eq!(outcome, Some(NavOutcome::Started));
        settle(&mut router, now);

        let snapshot = shell.snapshot();
        assert_eq!(router.state().current_section_id(), "educacion");
        assert_eq!(snapshot.title, "Educación | Luis San Martín");
        assert_eq!(snapshot.focused_menu.as_deref(), Some("educacion"));
        assert_eq!(snapshot.indicator_offset, shell.offset_of("educacion"));

        let pushes = history.pushes();
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].0.section, "educacion");
        assert_eq!(pushes[0].1, "#educacion");
    }

    #[test]
    fn digit_five_on_a_mobile_viewport_hides_the_indicator() {
        let (mut router, shell, _history) = portfolio_router();
        shell.set_viewport_width(768);
        let t0 = Instant::now();
        router.init(t0);
        let now = settle(&mut router, t0);

        router.handle_input(
            InputEvent::Key {
                key: Key::Digit(5),
                in_text_input: false,
            },
            now,
        );
        settle(&mut router, now);

        assert!(router.state().is_mobile());
        assert!(shell.snapshot().indicator_hidden);
        assert_eq!(router.state().current_section_id(), "educacion");
    }

    #[test]
    fn out_of_range_digits_navigate_nowhere() {
        let (mut router, _shell, history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);
        let now = settle(&mut router, t0);

        for digit in [8u8, 0u8] {
            let outcome = router.handle_input(
                InputEvent::Key {
                    key: Key::Digit(digit),
                    in_text_input: false,
                },
                now,
            );
            assert_eq!(outcome, None);
        }
        assert_eq!(router.state().current_section_id(), "inicio");
        assert!(history.pushes().is_empty());
    }

    #[test]
    fn startup_fragment_replays_before_user_input() {
        let shell = Arc::new(MockShell::portfolio());
        let history = Arc::new(MockHistory::new(Some("#certificaciones".into())));
        let mut router = router_with(shell.clone(), history.clone());

        let t0 = Instant::now();
        router.init(t0);
        settle(&mut router, t0);

        assert_eq!(router.state().current_section_id(), "certificaciones");
        assert_eq!(shell.snapshot().title, "Certificaciones | Luis San Martín");
        // A replay, so no entry was pushed.
        assert!(history.pushes().is_empty());
    }

    #[test]
    fn unknown_startup_fragment_keeps_the_default() {
        let shell = Arc::new(MockShell::portfolio());
        let history = Arc::new(MockHistory::new(Some("#nope".into())));
        let mut router = router_with(shell.clone(), history);

        let t0 = Instant::now();
        router.init(t0);
        settle(&mut router, t0);

        assert_eq!(router.state().current_section_id(), "inicio");
        assert_eq!(shell.snapshot().title, "Perfil | Luis San Martín");
    }

    #[test]
    fn missing_panel_aborts_activation_but_releases_the_lock() {
        let (mut router, shell, _history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);
        let now = settle(&mut router, t0);

        shell.remove_panel("servicios");
        router.navigate("servicios", Origin::User, now);
        let now = settle(&mut router, now);

        // Activation was skipped, state unchanged, lock released.
        assert!(!router.state().is_transitioning());
        assert_eq!(router.state().current_section_id(), "inicio");
        assert!(shell.snapshot().active_panels.is_empty());

        // The router is not stuck: the next navigation succeeds.
        router.navigate("contacto", Origin::User, now);
        settle(&mut router, now);
        assert_eq!(router.state().current_section_id(), "contacto");
    }

    #[test]
    fn resize_bursts_re_place_the_indicator_once_settled() {
        let (mut router, shell, _history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);
        let mut now = settle(&mut router, t0);
        shell.clear_indicator();

        router.handle_resize(now);
        now += Duration::from_millis(100);
        router.handle_resize(now);

        // Still inside the quiescence window.
        now += Duration::from_millis(100);
        router.pump(now);
        assert_eq!(shell.snapshot().indicator_offset, None);

        // Window elapses, then the deferred offset write lands.
        now += Duration::from_millis(200);
        router.pump(now);
        now += Duration::from_millis(10);
        router.pump(now);
        assert_eq!(shell.snapshot().indicator_offset, shell.offset_of("inicio"));
    }

    #[test]
    fn announcement_clears_then_sets_across_pump_cycles() {
        let (mut router, shell, _history) = portfolio_router();
        let t0 = Instant::now();
        router.init(t0);

        router.navigate("contacto", Origin::User, t0);
        let mut now = t0 + STEP;
        router.pump(now);

        // After the settle pump the live region has only been cleared.
        assert_eq!(
            shell.snapshot().live_region_writes.last().map(String::as_str),
            Some("")
        );

        now += STEP;
        router.pump(now);
        assert_eq!(
            shell.snapshot().live_region_writes.last().map(String::as_str),
            Some("Sección: Contacto")
        );
    }

    #[test]
    fn empty_shell_collections_fail_initialization() {
        let shell = Arc::new(MockShell::empty());
        let history = Arc::new(MockHistory::new(None));
        let err = Router::new(
            SectionRegistry::portfolio(),
            shell,
            history,
            RouterConfig::default(),
        )
        .err()
        .expect("router must refuse an empty shell");
        assert!(matches!(err, NavError::InitializationFailed));
    }
}
