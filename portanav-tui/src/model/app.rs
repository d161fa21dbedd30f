//! Top-level application model

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use portanav_core::utils::Scheduler;
use portanav_core::{Router, RouterConfig, SectionRegistry};

use crate::backend::AppConfig;
use crate::model::{SessionHistory, TerminalShell};

/// How long the startup splash stays up.
pub const LOADER_FADE: Duration = Duration::from_millis(500);
/// How long the welcome toast stays visible.
pub const TOAST_VISIBLE: Duration = Duration::from_millis(2500);

/// UI-side continuations, pumped alongside the router's own queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiTask {
    LoaderDone,
    HideToast,
}

pub struct App {
    pub should_quit: bool,
    pub router: Router,
    pub shell: Arc<TerminalShell>,
    pub history: Arc<SessionHistory>,
    /// Transient toast text shown in the status bar.
    pub status_message: Option<String>,
    /// True while the startup splash covers the screen.
    pub loading: bool,
    pub timers: Scheduler<UiTask>,
    /// Last title pushed to the terminal window, to avoid re-sending.
    pub last_window_title: Option<String>,
    pub mobile_breakpoint: u16,
}

impl App {
    pub fn new(
        config: &AppConfig,
        initial_fragment: Option<String>,
        viewport_width: u16,
        now: Instant,
    ) -> Result<Self> {
        let registry = SectionRegistry::portfolio();
        let landing = registry
            .first()
            .map(|s| s.id.clone())
            .context("empty section registry")?;

        let shell = Arc::new(TerminalShell::new(&registry, &landing, viewport_width));
        let history = Arc::new(SessionHistory::new(&landing, initial_fragment));
        let router_config = RouterConfig {
            mobile_breakpoint: config.mobile_breakpoint,
            ..RouterConfig::default()
        };
        let mut router = Router::new(registry, shell.clone(), history.clone(), router_config)
            .context("navigation setup failed")?;
        router.init(now);

        let mut timers = Scheduler::new();
        timers.schedule_after(now, LOADER_FADE, UiTask::LoaderDone);

        Ok(Self {
            should_quit: false,
            router,
            shell,
            history,
            status_message: None,
            loading: true,
            timers,
            last_window_title: None,
            mobile_breakpoint: config.mobile_breakpoint,
        })
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
