//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE: &str = "passvault.log";

/// Resolves the filter directive: `RUST_LOG`, then `config.trace_level`, then `"info"`.
fn resolve_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or("info");
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// Initializes the tracing subscriber with a rotating log file.
///
/// Events are formatted by the `tracing-subscriber` fmt layer without ANSI
/// colors and appended to `passvault.log` in the data directory. The terminal
/// is never written to, since it belongs to the display.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created
/// - Only the first call takes effect
///
/// # Example
///
/// ```rust
/// use passvault::observability::init_tracing;
/// use passvault::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFile::new(data_dir.join(LOG_FILE));
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(layer)
        .try_init();
}
