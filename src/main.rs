//! Patas Engine
//!
//! Opens the startup scene (track, patrolling player and a triangle) with the
//! editor overlay. Set `window.headless = true` to run without an OS window.

use std::process::ExitCode;
use patas::config::AppConfig;
use patas::systems::{HeadlessWindow, WindowError, WinitWindow};
use patas::{App, AppError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            return Err(e.into());
        }
    };
    init_logging(&config.debug.log_level);

    let headless = config.window.headless;
    let mut app = App::new(config);
    if headless {
        app.run(|window| Ok::<_, WindowError>(HeadlessWindow::from_config(window)))
    } else {
        app.run(WinitWindow::open)
    }
}

/// `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
