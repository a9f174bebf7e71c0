//! Focus and break lengths.

use std::ops::RangeInclusive;

/// Allowed focus lengths in minutes.
pub const FOCUS_MINUTES: RangeInclusive<u32> = 5..=60;
/// Allowed break lengths in minutes.
pub const BREAK_MINUTES: RangeInclusive<u32> = 1..=15;
/// Step used by the focus adjust buttons.
pub const FOCUS_STEP: i32 = 5;
/// Step used by the break adjust buttons.
pub const BREAK_STEP: i32 = 1;

/// Default focus length in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
/// Default break length in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Configured focus and break lengths.
///
/// Both values always lie inside their bounds; adjustments are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    focus_minutes: u32,
    break_minutes: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl TimerSettings {
    /// Create settings, clamping both values into their bounds.
    #[must_use]
    pub fn new(focus_minutes: u32, break_minutes: u32) -> Self {
        Self {
            focus_minutes: clamp_into(&FOCUS_MINUTES, i64::from(focus_minutes)),
            break_minutes: clamp_into(&BREAK_MINUTES, i64::from(break_minutes)),
        }
    }

    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Focus length in seconds.
    #[must_use]
    pub const fn focus_seconds(&self) -> u32 {
        self.focus_minutes * 60
    }

    /// Break length in seconds.
    #[must_use]
    pub const fn break_seconds(&self) -> u32 {
        self.break_minutes * 60
    }

    /// Shift the focus length by `delta` minutes, clamped to bounds.
    ///
    /// Returns true if the value changed.
    pub fn adjust_focus(&mut self, delta: i32) -> bool {
        let next = clamp_into(&FOCUS_MINUTES, i64::from(self.focus_minutes) + i64::from(delta));
        let changed = next != self.focus_minutes;
        self.focus_minutes = next;
        changed
    }

    /// Shift the break length by `delta` minutes, clamped to bounds.
    ///
    /// Returns true if the value changed.
    pub fn adjust_break(&mut self, delta: i32) -> bool {
        let next = clamp_into(&BREAK_MINUTES, i64::from(self.break_minutes) + i64::from(delta));
        let changed = next != self.break_minutes;
        self.break_minutes = next;
        changed
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_into(bounds: &RangeInclusive<u32>, value: i64) -> u32 {
    value.clamp(i64::from(*bounds.start()), i64::from(*bounds.end())) as u32
}
