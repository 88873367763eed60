use parking_lot::Mutex;
/// Process logger for hand-clock
///
/// Routes every `log::info!()`, `log::warn!()` etc. to a debug log file so
/// diagnostics never end up in the `preview` output on stdout.
///
/// Level selection, highest precedence first:
/// - `--log-level` on the command line
/// - the `HAND_CLOCK_LOG` environment variable (`error`, `warn`, `info`,
///   `debug`, `trace` or `off`); when set, lines are mirrored to stderr
/// - off
///
/// Output goes to `hand_clock_debug.log` in the system temp directory.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable consulted when no CLI level is given
pub const LOG_ENV_VAR: &str = "HAND_CLOCK_LOG";

/// Name of the debug log file inside the temp directory
pub const LOG_FILE_NAME: &str = "hand_clock_debug.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Resolve the effective level from the CLI flag and the environment value.
///
/// Returns the level and whether lines should be mirrored to stderr.
pub fn resolve_level(
    cli_level: Option<log::LevelFilter>,
    env_value: Option<&str>,
) -> (log::LevelFilter, bool) {
    let env_level = env_value.and_then(|value| log::LevelFilter::from_str(value.trim()).ok());
    match (cli_level, env_level) {
        (Some(level), env) => (level, env.is_some()),
        (None, Some(level)) => (level, true),
        (None, None) => (log::LevelFilter::Off, false),
    }
}

struct LogBridge {
    level: log::LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn write_line(&self, line: &str) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write_line(&format_record(record));
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

fn format_record(record: &log::Record) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}\n",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install the process logger. Safe to call more than once; only the first
/// call takes effect.
pub fn init_log_bridge(cli_level: Option<log::LevelFilter>) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let (level, mirror_stderr) = resolve_level(cli_level, env_value.as_deref());

    let file = if level == log::LevelFilter::Off {
        None
    } else {
        // Silently run without a file if it can't be opened
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok()
    };

    let bridge = LogBridge {
        level,
        file: Mutex::new(file),
        mirror_stderr,
    };
    bridge.write_line(&format!(
        "{}\nhand-clock {} debug session started at {} (level={})\n{}\n",
        "=".repeat(80),
        crate::VERSION,
        chrono::Local::now().to_rfc3339(),
        level,
        "=".repeat(80)
    ));

    if log::set_boxed_logger(Box::new(bridge)).is_ok() {
        log::set_max_level(level);
    }
}
