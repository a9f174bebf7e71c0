//! Session state machine.
//!
//! ```text
//! Absent --start--> Focusing <--tick at 0--> OnBreak
//!   ^                  |                        |
//!   +------stop--------+----------stop----------+
//! ```
//!
//! A tick on a session with time left counts down one second. A tick that
//! finds zero remaining switches to the other kind, sized from the settings
//! passed to that tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{SessionAction, SessionPhase, TimerError};
use super::settings::TimerSettings;

/// The two kinds of session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Focusing,
    OnBreak,
}

impl SessionKind {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Focusing => "Focusing",
            Self::OnBreak => "On Break",
        }
    }

    /// The kind that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focusing => Self::OnBreak,
            Self::OnBreak => Self::Focusing,
        }
    }

    /// Configured length of this kind, in minutes.
    #[must_use]
    pub const fn minutes(self, settings: &TimerSettings) -> u32 {
        match self {
            Self::Focusing => settings.focus_minutes(),
            Self::OnBreak => settings.break_minutes(),
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current session, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// No session: idle, or stopped.
    #[default]
    Absent,
    Focusing { remaining_seconds: u32 },
    OnBreak { remaining_seconds: u32 },
}

impl SessionState {
    /// A fresh session of `kind` sized from `settings`.
    #[must_use]
    pub const fn fresh(kind: SessionKind, settings: &TimerSettings) -> Self {
        Self::with_remaining(kind, kind.minutes(settings) * 60)
    }

    #[must_use]
    pub const fn with_remaining(kind: SessionKind, remaining_seconds: u32) -> Self {
        match kind {
            SessionKind::Focusing => Self::Focusing { remaining_seconds },
            SessionKind::OnBreak => Self::OnBreak { remaining_seconds },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Option<SessionKind> {
        match self {
            Self::Absent => None,
            Self::Focusing { .. } => Some(SessionKind::Focusing),
            Self::OnBreak { .. } => Some(SessionKind::OnBreak),
        }
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> Option<u32> {
        match self {
            Self::Absent => None,
            Self::Focusing { remaining_seconds } | Self::OnBreak { remaining_seconds } => {
                Some(*remaining_seconds)
            }
        }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        match self {
            Self::Absent => SessionPhase::Absent,
            Self::Focusing { .. } => SessionPhase::Focusing,
            Self::OnBreak { .. } => SessionPhase::OnBreak,
        }
    }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The session counted down and stayed the same kind.
    Counted { remaining_seconds: u32 },
    /// The session had run out and was replaced by the next kind.
    Transitioned { from: SessionKind, to: SessionKind },
}

/// Owns the single session and applies its transitions.
#[derive(Debug, Clone, Default)]
pub struct SessionMachine {
    state: SessionState,
}

impl SessionMachine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Absent,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Begin a focus session.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidStateTransition` if a session already exists.
    pub fn start(&mut self, settings: &TimerSettings) -> Result<SessionState, TimerError> {
        if !self.state.is_absent() {
            return Err(TimerError::InvalidStateTransition {
                from: self.state.phase(),
                action: SessionAction::Start,
            });
        }
        self.state = SessionState::fresh(SessionKind::Focusing, settings);
        Ok(self.state)
    }

    /// Advance the session by one second.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidStateTransition` if there is no session.
    pub fn tick(&mut self, settings: &TimerSettings) -> Result<Tick, TimerError> {
        let (Some(kind), Some(remaining_seconds)) =
            (self.state.kind(), self.state.remaining_seconds())
        else {
            return Err(TimerError::InvalidStateTransition {
                from: SessionPhase::Absent,
                action: SessionAction::Tick,
            });
        };

        if remaining_seconds > 0 {
            let remaining_seconds = remaining_seconds - 1;
            self.state = SessionState::with_remaining(kind, remaining_seconds);
            return Ok(Tick::Counted { remaining_seconds });
        }

        let next = kind.next();
        self.state = SessionState::fresh(next, settings);
        Ok(Tick::Transitioned {
            from: kind,
            to: next,
        })
    }

    /// Discard the session, whatever state it is in.
    pub fn stop(&mut self) -> SessionState {
        std::mem::take(&mut self.state)
    }
}
