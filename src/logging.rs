//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log lines go to a file in the
//! configuration directory. The filter comes from `LAZYSTAKE_LOG`, then the
//! config file, then [`DEFAULT_LOG_FILTER`](crate::state::config::DEFAULT_LOG_FILTER).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppConfig;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "LAZYSTAKE_LOG";

/// Installs the global subscriber writing to the log file.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be opened,
/// or a subscriber is already installed.
///
/// # Returns
///
/// The path of the log file.
pub fn init(config: &AppConfig) -> Result<PathBuf> {
    let directive = config.effective_log_filter(std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directive)?;

    let path = AppConfig::log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    tracing::debug!(filter = %directive, "Logging to {}", path.display());
    Ok(path)
}
