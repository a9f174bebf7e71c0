use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::timer::settings::{DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro focus/break timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Alternates focus and break sessions of adjustable length, with play/pause,
stop, a progress bar and an alert when a session runs out.

QUICK START:
  pomo                      Open the timer (25 minute focus, 5 minute break)
  pomo run --focus 50 -b 10 Open the timer with custom lengths
  pomo simulate --ticks 1501 --output json

KEYS:
  space      Play / pause
  s          Stop
  ←/→ h/l    Decrease / increase focus (5 minute steps)
  ↓/↑ j/k    Decrease / increase break (1 minute steps)
  q          Quit

Durations can only be changed while no session exists.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Configuration file [default: ~/.pomo/config.yaml]
    #[arg(long, global = true, env = "POMO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    Run(RunArgs),

    /// Run the timer headless for a number of ticks and print the result
    ///
    /// Presses play, delivers the given number of one-second ticks, then
    /// optionally pauses or stops. Useful for scripting and checking the
    /// session rules without waiting.
    ///
    /// # Examples
    ///
    ///   pomo simulate --ticks 1501
    ///   pomo simulate --focus 5 --break 1 --ticks 400 --output json
    ///   pomo simulate --ticks 10 --pause
    Simulate(SimulateArgs),

    /// Show configuration
    Config(ConfigArgs),

    /// Generate a shell completion script
    ///
    /// # Examples
    ///
    ///   pomo completions bash > ~/.bash_completion.d/pomo
    ///   pomo completions zsh > ~/.zfunc/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Initial focus and break lengths.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationArgs {
    /// Focus length in minutes (5-60)
    #[arg(short, long, default_value_t = DEFAULT_FOCUS_MINUTES,
          value_parser = clap::value_parser!(u32).range(5..=60))]
    pub focus: u32,

    /// Break length in minutes (1-15)
    #[arg(short = 'b', long = "break", default_value_t = DEFAULT_BREAK_MINUTES,
          value_parser = clap::value_parser!(u32).range(1..=15))]
    pub break_minutes: u32,
}

impl Default for DurationArgs {
    fn default() -> Self {
        Self {
            focus: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

/// Arguments for the interactive timer.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub durations: DurationArgs,

    /// Do not play an alert when a session runs out
    #[arg(long)]
    pub no_sound: bool,
}

/// Arguments for the headless simulation.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub durations: DurationArgs,

    /// Number of one-second ticks to deliver after pressing play
    #[arg(short, long, default_value_t = 0)]
    pub ticks: u32,

    /// Press pause after the ticks
    #[arg(long, conflicts_with = "stop")]
    pub pause: bool,

    /// Press stop after the ticks
    #[arg(long)]
    pub stop: bool,
}

/// Arguments for configuration commands.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,
    /// Print the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command_runs_timer() {
        let cli = Cli::try_parse_from(["pomo"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_cli_run_defaults() {
        let cli = Cli::try_parse_from(["pomo", "run"]).unwrap();
        if let Some(Commands::Run(args)) = cli.command {
            assert_eq!(args.durations, DurationArgs::default());
            assert!(!args.no_sound);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_run_custom_durations() {
        let cli =
            Cli::try_parse_from(["pomo", "run", "--focus", "50", "-b", "10", "--no-sound"]).unwrap();
        if let Some(Commands::Run(args)) = cli.command {
            assert_eq!(args.durations.focus, 50);
            assert_eq!(args.durations.break_minutes, 10);
            assert!(args.no_sound);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_durations() {
        assert!(Cli::try_parse_from(["pomo", "run", "--focus", "4"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "run", "--focus", "61"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "run", "--break", "0"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "run", "--break", "16"]).is_err());
    }

    #[test]
    fn test_cli_simulate() {
        let cli = Cli::try_parse_from([
            "pomo", "simulate", "--ticks", "1501", "--pause", "-o", "json",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        if let Some(Commands::Simulate(args)) = cli.command {
            assert_eq!(args.ticks, 1501);
            assert!(args.pause);
            assert!(!args.stop);
        } else {
            panic!("Expected Simulate command");
        }
    }

    #[test]
    fn test_cli_simulate_pause_conflicts_with_stop() {
        assert!(Cli::try_parse_from(["pomo", "simulate", "--pause", "--stop"]).is_err());
    }

    #[test]
    fn test_cli_config_path_flag() {
        let cli = Cli::try_parse_from(["pomo", "--config", "/tmp/p.yaml", "config", "show"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/p.yaml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommands::Show
            }))
        ));
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["pomo", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }
}
