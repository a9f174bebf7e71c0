//! Timer state machine errors.

use std::fmt;

use thiserror::Error;

/// Errors raised by the session state machine and timer controller.
///
/// The controller guards every user intent, so these only surface to
/// internal callers such as the tick driver and tests.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// The requested action is not valid from the current phase.
    #[error("cannot {action} while {from}")]
    InvalidStateTransition {
        from: SessionPhase,
        action: SessionAction,
    },
}

/// Which state the session machine was in, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Absent,
    Focusing,
    OnBreak,
    /// A session exists but the timer is not running.
    Paused,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Absent => "absent",
            Self::Focusing => "focusing",
            Self::OnBreak => "on break",
            Self::Paused => "paused",
        };
        write!(f, "{s}")
    }
}

/// A session machine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Tick,
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Tick => "tick",
        };
        write!(f, "{s}")
    }
}
