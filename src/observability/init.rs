//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "gif-explorer.log";

/// Installs the global subscriber: an `EnvFilter` and a plain-text `fmt`
/// layer writing to the rotating log file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.log_level`
/// 3. `"info"` if the configured level does not parse
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created
/// - Only the first call takes effect
///
/// The terminal is never written to, since it belongs to the UI.
pub fn init_tracing(config: &Config) {
    let log_dir = config
        .log_dir
        .clone()
        .unwrap_or_else(crate::infrastructure::paths::data_dir);
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let writer = FileWriter::new(log_dir.join(LOG_FILE_NAME));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_thread_names(true)
        .with_target(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
