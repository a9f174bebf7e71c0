//! Application state for the TUI.

use std::time::{Duration, Instant};

use chrono::Local;

use crate::error::PomoError;
use crate::timer::{Intent, Snapshot, Tick, TickInterval, TimerController};

/// Longest time the loop waits for input before redrawing.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Key help shown in the status bar.
pub const HELP: &str =
    "space:play/pause | s:stop | ←/→:focus | ↓/↑:break | ?:help | q:quit";

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The timer. Every mutation goes through it.
    controller: TimerController,
    /// Delivers ticks while the controller is running.
    interval: TickInterval,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create a new app instance around an idle controller.
    #[must_use]
    pub fn new(controller: TimerController) -> Self {
        Self {
            controller,
            interval: TickInterval::new(),
            status: None,
        }
    }

    /// Current state for the views.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    /// Apply a user intent and re-arm or disarm the tick interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the controller rejects the transition.
    pub fn dispatch(&mut self, intent: Intent, now: Instant) -> Result<(), PomoError> {
        self.status = None;
        self.controller.apply(intent)?;
        self.interval.set_period(self.controller.tick_interval(), now);
        Ok(())
    }

    /// Deliver a tick if one is due at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the controller rejects the tick.
    pub fn tick_if_due(&mut self, now: Instant) -> Result<(), PomoError> {
        if !self.interval.poll_due(now) {
            return Ok(());
        }
        if let Tick::Transitioned { to, .. } = self.controller.on_tick()? {
            self.status = Some(format!("{to} since {}", Local::now().format("%H:%M")));
        }
        Ok(())
    }

    /// How long the loop may wait for input at `now`.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.interval
            .time_until_next(now)
            .map_or(MAX_POLL, |until| until.min(MAX_POLL))
    }

    /// Whether the tick interval is armed.
    #[must_use]
    pub const fn ticking(&self) -> bool {
        self.interval.is_armed()
    }

    /// Show key help in the status bar.
    pub fn show_help(&mut self) {
        self.status = Some(HELP.to_string());
    }
}
