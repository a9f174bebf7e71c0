//! Headless timer run.

use serde::Serialize;

use crate::cli::args::{OutputFormat, SimulateArgs};
use crate::config::Config;
use crate::error::PomoError;
use crate::output::format_simulation;
use crate::timer::{Intent, Silent, Snapshot, Tick, TimerController, TimerSettings};

/// Outcome of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Ticks delivered.
    pub ticks: u32,
    /// Sessions that ran out, each of which would have played the alert.
    pub alerts: u32,
    /// Final state.
    pub snapshot: Snapshot,
}

/// Press play, deliver `args.ticks` ticks, then pause or stop if asked.
///
/// # Errors
///
/// Returns an error if the controller rejects a transition.
pub fn run_simulation(args: &SimulateArgs, config: &Config) -> Result<SimulationReport, PomoError> {
    let settings = TimerSettings::new(args.durations.focus, args.durations.break_minutes);
    let mut controller =
        TimerController::new(settings, Box::new(Silent)).with_period(config.tick.period());

    controller.apply(Intent::PlayPause)?;

    let mut alerts = 0;
    for _ in 0..args.ticks {
        if let Tick::Transitioned { .. } = controller.on_tick()? {
            alerts += 1;
        }
    }

    if args.pause {
        controller.apply(Intent::PlayPause)?;
    } else if args.stop {
        controller.apply(Intent::Stop)?;
    }

    Ok(SimulationReport {
        ticks: args.ticks,
        alerts,
        snapshot: controller.snapshot(),
    })
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the run or output formatting fails.
pub fn simulate(
    args: &SimulateArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PomoError> {
    let report = run_simulation(args, config)?;
    format_simulation(&report, format)
}
