//! Audible alert played when a session runs out.
//!
//! Playing is best-effort: callers log a failure and carry on.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::SoundConfig;
use crate::error::PomoError;

/// Chime used when no other resource is configured.
pub const DEFAULT_SOUND: &str = "https://bigsoundbank.com/UPLOAD/mp3/1482.mp3";

/// Identifies the sound to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCue {
    pub resource: String,
}

impl Default for SoundCue {
    fn default() -> Self {
        Self {
            resource: DEFAULT_SOUND.to_string(),
        }
    }
}

/// Plays a sound once, without waiting for it to finish.
#[cfg_attr(test, mockall::automock)]
pub trait AlertPlayer {
    /// Play `cue` once.
    ///
    /// # Errors
    ///
    /// Returns `PomoError::Alert` if playback could not be started.
    fn play(&mut self, cue: &SoundCue) -> Result<(), PomoError>;
}

/// Rings the terminal bell.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AlertPlayer for TerminalBell {
    fn play(&mut self, _cue: &SoundCue) -> Result<(), PomoError> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .map_err(|e| PomoError::Alert(format!("bell: {e}")))
    }
}

/// Spawns an external player with the cue resource as its last argument.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    /// Build a player from a command line split into words.
    ///
    /// Returns `None` for an empty command.
    #[must_use]
    pub fn from_words(words: &[String]) -> Option<Self> {
        let (program, args) = words.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl AlertPlayer for CommandPlayer {
    fn play(&mut self, cue: &SoundCue) -> Result<(), PomoError> {
        // The child is not waited on.
        Command::new(&self.program)
            .args(&self.args)
            .arg(&cue.resource)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|e| PomoError::Alert(format!("{}: {e}", self.program)))
    }
}

/// Plays nothing.
#[derive(Debug, Default)]
pub struct Silent;

impl AlertPlayer for Silent {
    fn play(&mut self, _cue: &SoundCue) -> Result<(), PomoError> {
        Ok(())
    }
}

/// Pick the player described by the sound configuration.
#[must_use]
pub fn player_for(config: &SoundConfig) -> Box<dyn AlertPlayer> {
    if !config.enabled {
        return Box::new(Silent);
    }
    match config.command.as_deref().and_then(CommandPlayer::from_words) {
        Some(player) => Box::new(player),
        None => Box::new(TerminalBell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cue() {
        assert_eq!(SoundCue::default().resource, DEFAULT_SOUND);
    }

    #[test]
    fn test_command_player_from_words() {
        let words = vec!["paplay".to_string(), "--volume=40000".to_string()];
        let player = CommandPlayer::from_words(&words).unwrap();
        assert_eq!(player.program, "paplay");
        assert_eq!(player.args, vec!["--volume=40000".to_string()]);

        assert!(CommandPlayer::from_words(&[]).is_none());
    }

    #[test]
    fn test_missing_program_is_an_alert_error() {
        let mut player =
            CommandPlayer::from_words(&["pomo-test-no-such-player".to_string()]).unwrap();
        let err = player.play(&SoundCue::default()).unwrap_err();
        assert!(matches!(err, PomoError::Alert(_)));
    }

    #[test]
    fn test_silent_always_succeeds() {
        assert!(Silent.play(&SoundCue::default()).is_ok());
    }

    #[test]
    fn test_disabled_sound_is_silent() {
        let config = SoundConfig {
            enabled: false,
            command: Some(vec!["pomo-test-no-such-player".to_string()]),
            ..SoundConfig::default()
        };
        // A disabled config never spawns anything, so this cannot fail.
        assert!(player_for(&config).play(&SoundCue::default()).is_ok());
    }
}
