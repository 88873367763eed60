//! Typed error variants for the hand-clock-config crate.
//!
//! Loading never fails on malformed data (fields fall back to defaults), so
//! these errors only cover store I/O and explicit user input such as an
//! unknown preset name on the command line.

use thiserror::Error;

/// Errors that can occur when reading or writing the configuration store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing a store file.
    #[error("I/O error accessing config store: {0}")]
    Io(#[from] std::io::Error),

    /// The config record could not be serialized to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Neither the platform config dir nor the home dir could be resolved.
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    /// A theme preset name did not match any known preset.
    #[error("unknown theme preset: {0}")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
