//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::timer::Intent;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Forward an intent to the timer.
    Timer(Intent),
    /// Show key help.
    Help,
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(timeout: Duration) -> Result<Option<Action>, PomoError> {
    if !event::poll(timeout).map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Translate a key press into an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Char(' ' | 'p') => Action::Timer(Intent::PlayPause),
        KeyCode::Char('s') => Action::Timer(Intent::Stop),

        // Durations - arrows or vim keys
        KeyCode::Char('h') | KeyCode::Left => Action::Timer(Intent::DecreaseFocus),
        KeyCode::Char('l') | KeyCode::Right => Action::Timer(Intent::IncreaseFocus),
        KeyCode::Char('j') | KeyCode::Down => Action::Timer(Intent::DecreaseBreak),
        KeyCode::Char('k') | KeyCode::Up => Action::Timer(Intent::IncreaseBreak),

        KeyCode::Char('?') => Action::Help,
        _ => return None,
    };
    Some(action)
}
