//! Error types for pomo.

use thiserror::Error;

use crate::timer::TimerError;

/// Errors that can occur while running pomo.
#[derive(Error, Debug)]
pub enum PomoError {
    /// Configuration could not be resolved, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to or read from.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The alert collaborator failed to play a sound.
    #[error("Alert failed: {0}")]
    Alert(String),

    /// Serialization or deserialization failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The timer rejected an operation.
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PomoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(format!("JSON: {err}"))
    }
}

impl From<serde_yaml::Error> for PomoError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(format!("YAML: {err}"))
    }
}

impl PomoError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Terminal(_) | Self::Io(_) => 3,
            Self::Alert(_) | Self::Parse(_) | Self::Timer(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{SessionAction, SessionPhase};

    #[test]
    fn test_config_error_message() {
        let err = PomoError::Config("missing home".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing home");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_timer_error_is_transparent() {
        let err: PomoError = TimerError::InvalidStateTransition {
            from: SessionPhase::Absent,
            action: SessionAction::Tick,
        }
        .into();
        assert_eq!(err.to_string(), "cannot tick while absent");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not: a number").unwrap_err();
        let err: PomoError = yaml_err.into();
        assert!(matches!(err, PomoError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: YAML:"));
    }
}
