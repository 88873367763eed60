//! Configuration system for the hand-clock desktop clock.
//!
//! This crate provides configuration loading, saving, and default values
//! for the clock face. It includes:
//!
//! - The flat `Config` record and its numeric ranges
//! - Theme presets and hex colors
//! - A key-value store abstraction with file-backed and in-memory stores
//! - `ConfigManager`, which loads, edits, persists and resets the record
//! - The chrome palette derived from the page background

pub mod config;
pub mod defaults;
pub mod error;
pub mod manager;
pub mod palette;
pub mod storage;
pub mod themes;

// Re-export main types for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use manager::{CONFIG_KEY, ConfigManager};
pub use palette::UiPalette;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use themes::{Color, ThemeColors, ThemePreset};
