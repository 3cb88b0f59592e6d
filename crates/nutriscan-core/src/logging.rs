//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "NUTRISCAN_LOG";

const LOG_FILE_NAME: &str = "nutriscan.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/nutriscan/logs/`, never to the
/// terminal, since the TUI owns stdout.
/// Log level is controlled by the `NUTRISCAN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// NUTRISCAN_LOG=debug nutriscan
/// NUTRISCAN_LOG=nutriscan_app=trace nutriscan
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("NutriScan starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Default filter when `NUTRISCAN_LOG` is unset or invalid
fn default_filter() -> &'static str {
    "nutriscan=info,nutriscan_core=info,nutriscan_app=info,nutriscan_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("nutriscan").join("logs")
}

/// Get the log file path (the appender adds a date suffix on rotation)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}
