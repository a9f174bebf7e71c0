//! Pomodoro timer core.
//!
//! - Focus/break settings with clamped adjustment
//! - Session state machine (absent, focusing, on break)
//! - Controller driven by user intents and one-second ticks
//! - Alert and tick interval collaborators

pub mod alert;
pub mod controller;
pub mod duration;
pub mod error;
pub mod interval;
pub mod session;
pub mod settings;

pub use alert::{player_for, AlertPlayer, CommandPlayer, Silent, SoundCue, TerminalBell};
pub use controller::{Intent, Snapshot, TimerController, DEFAULT_TICK_PERIOD};
pub use duration::{minutes_to_duration, seconds_to_duration};
pub use error::{SessionAction, SessionPhase, TimerError};
pub use interval::TickInterval;
pub use session::{SessionKind, SessionMachine, SessionState, Tick};
pub use settings::TimerSettings;
