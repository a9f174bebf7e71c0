//! Duration formatting for the timer display.
//!
//! Minutes render as `MM:00`, seconds as `MM:SS`, both zero-padded.

/// Format a whole number of minutes as `MM:00`.
#[must_use]
pub fn minutes_to_duration(minutes: u32) -> String {
    format!("{minutes:02}:00")
}

/// Format a number of seconds as `MM:SS`.
#[must_use]
pub fn seconds_to_duration(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Percentage of a session that has elapsed, 0 - 100.
///
/// `total_minutes` is the configured length of the session kind, so the
/// value follows the current settings rather than the length the session
/// started with.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn elapsed_percent(remaining_seconds: u32, total_minutes: u32) -> u16 {
    let total_seconds = total_minutes * 60;
    if total_seconds == 0 {
        return 100;
    }
    let remaining = (f64::from(remaining_seconds) / f64::from(total_seconds) * 100.0).round();
    (100.0 - remaining).clamp(0.0, 100.0) as u16
}

/// Render a text progress bar for a percentage.
#[must_use]
pub fn render_progress_bar(percent: u16, width: usize) -> String {
    let filled = width * usize::from(percent.min(100)) / 100;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
