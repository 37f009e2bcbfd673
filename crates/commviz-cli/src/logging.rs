use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

pub const LOG_FILE: &str = "commviz.log";

/// Install the global subscriber, appending to `<data_dir>/commviz.log`.
///
/// The TUI owns stdout and stderr while it runs, so log lines always go to
/// the file. `RUST_LOG` takes precedence over `--log-level`.
pub fn init(data_dir: &Path, level: LogLevel) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))?;

    let default_level = level.to_string();
    // Fallback to the `--log-level` filter if the environment variable is
    // not set _or_ contains an invalid value
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
