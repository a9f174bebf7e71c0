//! UI rendering for the TUI.
//!
//! Views only read the snapshot; input is handled in `event`.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::timer::{minutes_to_duration, seconds_to_duration, SessionKind, Snapshot};
use crate::tui::app::{App, HELP};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let snapshot = app.snapshot();

    // Create layout: header, durations, controls, session, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Durations
            Constraint::Length(3), // Controls
            Constraint::Min(0),    // Session
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_durations(frame, &snapshot, chunks[1]);
    render_controls(frame, &snapshot, chunks[2]);
    render_session(frame, &snapshot, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(" Pomodoro Timer ")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(header, area);
}

/// Style for an adjust button. Buttons are disabled while a session exists.
fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

/// A label with `[-]` and `[+]` buttons.
fn duration_line(label: &str, minutes: u32, enabled: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label} Duration: {} ", minutes_to_duration(minutes)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("[-]", button_style(enabled)),
        Span::raw(" "),
        Span::styled("[+]", button_style(enabled)),
    ])
}

/// Render the focus and break duration controls side by side.
fn render_durations(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let enabled = snapshot.durations_editable();
    let focus = Paragraph::new(duration_line("Focus", snapshot.focus_minutes, enabled))
        .block(Block::default().borders(Borders::ALL).title(" ←/→ "));
    let brk = Paragraph::new(duration_line("Break", snapshot.break_minutes, enabled))
        .block(Block::default().borders(Borders::ALL).title(" ↓/↑ "));

    frame.render_widget(focus, columns[0]);
    frame.render_widget(brk, columns[1]);
}

/// Render play/pause and stop.
fn render_controls(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let play = if snapshot.is_running {
        Span::styled("[⏸ Pause]", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("[▶ Play]", Style::default().fg(Color::Green))
    };
    let stop = Span::styled("[■ Stop]", button_style(!snapshot.session.is_absent()));

    let controls = Paragraph::new(Line::from(vec![play, Span::raw(" "), stop]))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(controls, area);
}

/// Render the current session. Nothing is drawn when there is none.
fn render_session(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let (Some(kind), Some(remaining), Some(minutes), Some(percent)) = (
        snapshot.session.kind(),
        snapshot.session.remaining_seconds(),
        snapshot.session_minutes(),
        snapshot.elapsed_percent(),
    ) else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Remaining
            Constraint::Length(1), // Paused
            Constraint::Length(3), // Progress
            Constraint::Min(0),
        ])
        .split(area);

    let color = match kind {
        SessionKind::Focusing => Color::Red,
        SessionKind::OnBreak => Color::Green,
    };

    let title = Paragraph::new(format!(
        "{kind} for {} minutes",
        minutes_to_duration(minutes)
    ))
    .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    frame.render_widget(title, rows[0]);

    let subtitle = Paragraph::new(format!("{} remaining", seconds_to_duration(remaining)));
    frame.render_widget(subtitle, rows[1]);

    if !snapshot.is_running {
        let paused = Paragraph::new("PAUSED").style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(paused, rows[2]);
    }

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent);
    frame.render_widget(gauge, rows[3]);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
