//! Command-line interface for hand-clock.
//!
//! This module handles CLI argument parsing and the one-shot subcommands
//! (preview, theme, reset, show-config). With no subcommand the clock window
//! opens.

use crate::clock::Clock;
use crate::text_surface::TextSurface;
use crate::time_source::{ClockTime, ManualTimeSource, SystemTimeSource, TimeSource};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use hand_clock_config::{ConfigManager, FileStore, MemoryStore, ThemePreset};
use std::io::Write;
use std::path::{Path, PathBuf};

/// hand-clock - a clock drawn by rotating pairs of hands
#[derive(Parser, Debug)]
#[command(name = "hand-clock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the saved settings (default: ~/.config/hand-clock)
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Log level for the debug log file (overrides HAND_CLOCK_LOG)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the clock face as box-drawing characters
    Preview {
        /// Show this time instead of the current one
        #[arg(long, value_name = "HH:MM:SS")]
        at: Option<ClockTime>,
    },
    /// Apply a theme preset and save it
    Theme {
        /// Preset name (default, ocean, sunset, forest, neon, dream)
        name: String,
    },
    /// Restore the default settings and save them
    Reset,
    /// Print the effective settings as JSON
    ShowConfig,
}

/// Log level accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Settings directory override
    pub config_dir: Option<PathBuf>,
    /// Log level from `--log-level`, if given
    pub log_level: Option<log::LevelFilter>,
}

/// Result of CLI processing
#[derive(Debug)]
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    dispatch(Cli::parse(), &mut std::io::stdout())
}

/// Run a parsed command line, writing subcommand output to `out`.
pub fn dispatch(cli: Cli, out: &mut impl Write) -> CliResult {
    let options = RuntimeOptions {
        config_dir: cli.config_dir,
        log_level: cli.log_level.map(Into::into),
    };

    let Some(command) = cli.command else {
        return CliResult::Continue(options);
    };

    match run_command(command, options.config_dir.as_deref(), out) {
        Ok(()) => CliResult::Exit(0),
        Err(e) => {
            eprintln!("hand-clock: error: {e:#}");
            CliResult::Exit(1)
        }
    }
}

/// Open the settings store at `config_dir`, or the default location.
pub fn open_config(config_dir: Option<&Path>) -> anyhow::Result<ConfigManager> {
    match config_dir {
        Some(dir) => {
            log::info!("Using settings directory {}", dir.display());
            Ok(ConfigManager::load(Box::new(FileStore::new(dir))))
        }
        None => ConfigManager::load_default().context("Failed to locate the settings directory"),
    }
}

/// Like `open_config`, but falls back to an in-memory store so the clock
/// still opens when the settings directory cannot be resolved.
pub fn open_config_or_memory(config_dir: Option<&Path>) -> ConfigManager {
    with_memory_fallback(open_config(config_dir))
}

fn with_memory_fallback(opened: anyhow::Result<ConfigManager>) -> ConfigManager {
    opened.unwrap_or_else(|e| {
        log::warn!("Settings will not be saved this session: {e:#}");
        ConfigManager::load(Box::new(MemoryStore::new()))
    })
}

fn run_command(
    command: Commands,
    config_dir: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Preview { at } => {
            let preview = match at {
                Some(time) => render_preview(ManualTimeSource::new(time)),
                None => render_preview(SystemTimeSource),
            };
            write!(out, "{preview}")?;
        }
        Commands::Theme { name } => {
            let preset: ThemePreset = name.parse().with_context(|| {
                let names: Vec<&str> = ThemePreset::ALL.iter().map(|p| p.name()).collect();
                format!("Available themes: {}", names.join(", "))
            })?;
            let mut manager = open_config(config_dir)?;
            manager
                .apply_preset(preset)
                .context("Failed to save settings")?;
            writeln!(out, "Applied theme {}", preset.label())?;
        }
        Commands::Reset => {
            let mut manager = open_config(config_dir)?;
            manager.reset().context("Failed to save settings")?;
            writeln!(out, "Settings restored to defaults")?;
        }
        Commands::ShowConfig => {
            let manager = open_config(config_dir)?;
            writeln!(out, "{}", serde_json::to_string_pretty(manager.config())?)?;
        }
    }
    Ok(())
}

/// Render one frame of the face as text using `source` for the time.
pub fn render_preview(source: impl TimeSource) -> String {
    let mut surface = TextSurface::new();
    let mut clock = Clock::new(source);
    clock.start(&mut surface);
    surface.to_string()
}
