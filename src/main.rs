// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use hand_clock::app::App;
use hand_clock::cli;

fn main() -> Result<()> {
    // Process CLI arguments first so subcommand output stays clean
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };
    // --log-level takes precedence over HAND_CLOCK_LOG
    hand_clock::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting hand-clock {}", hand_clock::VERSION);

    let result = App::new(&runtime_options).and_then(App::run);

    match result {
        Ok(()) => {
            log::info!("Clock window closed");
            Ok(())
        }
        Err(ref e) => {
            log::error!("hand-clock exited with an error: {e:#}");
            eprintln!("hand-clock: error: {e:#}");
            #[cfg(target_os = "linux")]
            {
                let msg = format!("{e:?}").to_lowercase();
                if msg.contains("display") || msg.contains("wayland") || msg.contains("x11") {
                    eprintln!(
                        "hand-clock: hint: no display server found; ensure DISPLAY (X11) or \
                         WAYLAND_DISPLAY (Wayland) is set"
                    );
                }
            }
            result
        }
    }
}
