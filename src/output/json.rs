//! JSON output formatting for pomo.

use serde::Serialize;

use crate::error::PomoError;

/// Serialize any value as pretty-printed JSON
///
/// # Errors
///
/// Returns `PomoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
