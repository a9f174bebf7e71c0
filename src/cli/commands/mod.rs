//! Command implementations for pomo.
//!
//! This module contains the implementation of all CLI commands.

mod simulate;

pub use simulate::{run_simulation, simulate, SimulationReport};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, ConfigCommands, OutputFormat, RunArgs};
use crate::config::{Config, Paths};
use crate::error::PomoError;
use crate::logging;
use crate::output::to_json;
use crate::timer::{player_for, AlertPlayer, Silent, SoundCue, TimerController, TimerSettings};
use crate::tui;

/// Execute the run command: open the interactive timer.
///
/// # Errors
///
/// Returns an error if logging or the terminal cannot be set up.
pub fn run(args: &RunArgs, config: &Config) -> Result<String, PomoError> {
    let log_file = match &config.log.file {
        Some(path) => path.clone(),
        None => {
            let paths = Paths::new()?;
            paths.ensure_root()?;
            paths.log_file
        }
    };
    logging::init_file(&config.log, &log_file)?;

    let settings = TimerSettings::new(args.durations.focus, args.durations.break_minutes);
    let alert: Box<dyn AlertPlayer> = if args.no_sound {
        Box::new(Silent)
    } else {
        player_for(&config.sound)
    };
    let controller = TimerController::new(settings, alert)
        .with_period(config.tick.period())
        .with_cue(SoundCue {
            resource: config.sound.resource.clone(),
        });

    tui::run(controller)?;
    Ok(String::new())
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration path cannot be resolved or
/// serialization fails.
pub fn config(
    cmd: &ConfigCommands,
    config: &Config,
    path: Option<&std::path::Path>,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Pretty => config.to_yaml(),
            OutputFormat::Json => to_json(config),
        },
        ConfigCommands::Path => {
            let path = match path {
                Some(path) => path.to_path_buf(),
                None => Paths::new()?.config_file,
            };
            match format {
                OutputFormat::Pretty => Ok(path.display().to_string()),
                OutputFormat::Json => to_json(&serde_json::json!({ "path": path })),
            }
        }
    }
}

/// Generate a completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PomoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomo", &mut buf);
    String::from_utf8(buf).map_err(|e| PomoError::Parse(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_show_yaml() {
        let out = config(&ConfigCommands::Show, &Config::default(), None, OutputFormat::Pretty)
            .unwrap();
        assert!(out.contains("interval_ms: 1000"));
        assert!(out.contains("enabled: true"));
    }

    #[test]
    fn test_config_show_json() {
        let out =
            config(&ConfigCommands::Show, &Config::default(), None, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["tick"]["interval_ms"], 1000);
    }

    #[test]
    fn test_config_path_explicit() {
        let path = PathBuf::from("/tmp/pomo-test/config.yaml");
        let out = config(
            &ConfigCommands::Path,
            &Config::default(),
            Some(path.as_path()),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert_eq!(out, "/tmp/pomo-test/config.yaml");
    }

    #[test]
    fn test_completions_mention_subcommands() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("pomo"));
        assert!(script.contains("simulate"));
    }
}
