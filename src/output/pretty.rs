use colored::Colorize;

use crate::cli::commands::SimulationReport;
use crate::timer::duration::render_progress_bar;
use crate::timer::{minutes_to_duration, seconds_to_duration, SessionKind, Snapshot};

/// Format a one-line description of the current session.
pub fn format_session_pretty(snapshot: &Snapshot) -> String {
    let (Some(kind), Some(remaining)) = (
        snapshot.session.kind(),
        snapshot.session.remaining_seconds(),
    ) else {
        return "none".dimmed().to_string();
    };

    let label = match kind {
        SessionKind::Focusing => kind.label().red().bold(),
        SessionKind::OnBreak => kind.label().green().bold(),
    };
    let state = if snapshot.is_running {
        "running".normal()
    } else {
        "PAUSED".yellow()
    };

    format!(
        "{label}  {} remaining  [{state}]",
        seconds_to_duration(remaining)
    )
}

/// Format a simulation report
pub fn format_simulation_pretty(report: &SimulationReport) -> String {
    let snapshot = &report.snapshot;
    let alerts = if report.alerts == 1 { "alert" } else { "alerts" };

    let mut output = format!(
        "Simulation ({} ticks, {} {alerts})\n",
        report.ticks, report.alerts
    );
    output.push_str(&"─".repeat(40));
    output.push('\n');

    output.push_str(&format!("Session:  {}\n", format_session_pretty(snapshot)));
    if let Some(percent) = snapshot.elapsed_percent() {
        output.push_str(&format!(
            "Progress: {} {percent}%\n",
            render_progress_bar(percent, 20)
        ));
    }
    output.push_str(&format!(
        "Focus:    {}\n",
        minutes_to_duration(snapshot.focus_minutes)
    ));
    output.push_str(&format!(
        "Break:    {}",
        minutes_to_duration(snapshot.break_minutes)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::SessionState;

    fn report(session: SessionState, is_running: bool) -> SimulationReport {
        SimulationReport {
            ticks: 10,
            alerts: 0,
            snapshot: Snapshot {
                is_running,
                session,
                focus_minutes: 25,
                break_minutes: 5,
            },
        }
    }

    #[test]
    fn test_format_absent_session() {
        colored::control::set_override(false);
        let out = format_simulation_pretty(&report(SessionState::Absent, false));
        assert!(out.starts_with("Simulation (10 ticks, 0 alerts)"));
        assert!(out.contains("Session:  none"));
        assert!(!out.contains("Progress"));
        assert!(out.contains("Focus:    25:00"));
        assert!(out.contains("Break:    05:00"));
    }

    #[test]
    fn test_format_paused_session() {
        colored::control::set_override(false);
        let out = format_simulation_pretty(&report(
            SessionState::Focusing {
                remaining_seconds: 750,
            },
            false,
        ));
        assert!(out.contains("Focusing  12:30 remaining  [PAUSED]"));
        assert!(out.contains("50%"));
    }
}
