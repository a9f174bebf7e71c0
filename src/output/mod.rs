//! Output formatting for pomo.
//!
//! This module provides formatters for displaying timer results in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::cli::commands::SimulationReport;
use crate::error::PomoError;

pub use json::*;
pub use pretty::*;

/// Format a simulation report based on output format
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn format_simulation(
    report: &SimulationReport,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_simulation_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}
