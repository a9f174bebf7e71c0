//! Timer controller.
//!
//! Owns the run flag, the settings and the single session. User intents and
//! ticks are the only ways in, so every transition reads the latest state
//! and completes before the next one starts.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::alert::{AlertPlayer, SoundCue};
use super::duration::elapsed_percent;
use super::error::{SessionAction, SessionPhase, TimerError};
use super::session::{SessionMachine, SessionState, Tick};
use super::settings::{TimerSettings, BREAK_STEP, FOCUS_STEP};

/// Length of one tick unless configured otherwise.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// A user action emitted by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    IncreaseFocus,
    DecreaseFocus,
    IncreaseBreak,
    DecreaseBreak,
    PlayPause,
    Stop,
}

/// Read-only state handed to the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub is_running: bool,
    pub session: SessionState,
    pub focus_minutes: u32,
    pub break_minutes: u32,
}

impl Snapshot {
    /// Whether the duration controls accept edits.
    #[must_use]
    pub const fn durations_editable(&self) -> bool {
        self.session.is_absent()
    }

    /// Configured length of the current session kind.
    #[must_use]
    pub fn session_minutes(&self) -> Option<u32> {
        self.session.kind().map(|kind| {
            kind.minutes(&TimerSettings::new(self.focus_minutes, self.break_minutes))
        })
    }

    /// Elapsed share of the current session, 0 - 100.
    #[must_use]
    pub fn elapsed_percent(&self) -> Option<u16> {
        let remaining = self.session.remaining_seconds()?;
        let minutes = self.session_minutes()?;
        Some(elapsed_percent(remaining, minutes))
    }
}

/// Drives the session machine from intents and ticks.
pub struct TimerController {
    settings: TimerSettings,
    session: SessionMachine,
    running: bool,
    period: Duration,
    alert: Box<dyn AlertPlayer>,
    cue: SoundCue,
}

impl std::fmt::Debug for TimerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerController")
            .field("settings", &self.settings)
            .field("session", &self.session)
            .field("running", &self.running)
            .field("period", &self.period)
            .finish_non_exhaustive()
    }
}

impl TimerController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(settings: TimerSettings, alert: Box<dyn AlertPlayer>) -> Self {
        Self {
            settings,
            session: SessionMachine::new(),
            running: false,
            period: DEFAULT_TICK_PERIOD,
            alert,
            cue: SoundCue::default(),
        }
    }

    /// Use `period` as the length of one tick.
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Play `cue` on transitions.
    #[must_use]
    pub fn with_cue(mut self, cue: SoundCue) -> Self {
        self.cue = cue;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> TimerSettings {
        self.settings
    }

    #[must_use]
    pub const fn session(&self) -> SessionState {
        self.session.state()
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Shift the focus length. Ignored while a session exists.
    ///
    /// Returns true if the value changed.
    pub fn adjust_focus_duration(&mut self, delta: i32) -> bool {
        if !self.session().is_absent() {
            debug!(delta, "focus edit ignored during session");
            return false;
        }
        self.settings.adjust_focus(delta)
    }

    /// Shift the break length. Ignored while a session exists.
    ///
    /// Returns true if the value changed.
    pub fn adjust_break_duration(&mut self, delta: i32) -> bool {
        if !self.session().is_absent() {
            debug!(delta, "break edit ignored during session");
            return false;
        }
        self.settings.adjust_break(delta)
    }

    /// Toggle running. Starting from idle begins a focus session; starting
    /// while paused resumes the existing session unchanged.
    ///
    /// # Errors
    ///
    /// Propagates a session machine error; unreachable through this method
    /// since a session is only started when none exists.
    pub fn play_pause(&mut self) -> Result<(), TimerError> {
        if self.running {
            self.running = false;
            info!(session = ?self.session(), "paused");
            return Ok(());
        }

        if self.session().is_absent() {
            let state = self.session.start(&self.settings)?;
            info!(session = ?state, "session started");
        } else {
            info!(session = ?self.session(), "resumed");
        }
        self.running = true;
        Ok(())
    }

    /// Stop running and discard the session.
    pub fn stop(&mut self) {
        self.running = false;
        let previous = self.session.stop();
        if !previous.is_absent() {
            info!(session = ?previous, "stopped");
        }
    }

    /// Advance one second. Plays the alert when the session switches kind.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidStateTransition` when called while not
    /// running; ticks must only be delivered while the interval is armed.
    pub fn on_tick(&mut self) -> Result<Tick, TimerError> {
        if !self.running {
            let from = if self.session().is_absent() {
                SessionPhase::Absent
            } else {
                SessionPhase::Paused
            };
            return Err(TimerError::InvalidStateTransition {
                from,
                action: SessionAction::Tick,
            });
        }

        let tick = self.session.tick(&self.settings)?;
        if let Tick::Transitioned { from, to } = tick {
            info!(%from, %to, "session complete");
            if let Err(err) = self.alert.play(&self.cue) {
                warn!(error = %err, "alert failed");
            }
        }
        Ok(tick)
    }

    /// Period the tick interval should run at: `Some` while running,
    /// `None` while paused or idle.
    #[must_use]
    pub const fn tick_interval(&self) -> Option<Duration> {
        if self.running {
            Some(self.period)
        } else {
            None
        }
    }

    /// Apply a user intent.
    ///
    /// # Errors
    ///
    /// See [`TimerController::play_pause`].
    pub fn apply(&mut self, intent: Intent) -> Result<(), TimerError> {
        match intent {
            Intent::IncreaseFocus => {
                self.adjust_focus_duration(FOCUS_STEP);
            }
            Intent::DecreaseFocus => {
                self.adjust_focus_duration(-FOCUS_STEP);
            }
            Intent::IncreaseBreak => {
                self.adjust_break_duration(BREAK_STEP);
            }
            Intent::DecreaseBreak => {
                self.adjust_break_duration(-BREAK_STEP);
            }
            Intent::PlayPause => self.play_pause()?,
            Intent::Stop => self.stop(),
        }
        Ok(())
    }

    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            is_running: self.running,
            session: self.session.state(),
            focus_minutes: self.settings.focus_minutes(),
            break_minutes: self.settings.break_minutes(),
        }
    }
}
