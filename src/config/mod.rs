//! Configuration management for pomo.
//!
//! This module handles loading configuration from `~/.pomo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, LogConfig, SoundConfig, TickConfig};
