use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Sends this crate's diagnostics (and any other `log` records) to `path`.
/// Stdout belongs to the display, so logging to the terminal would corrupt it.
pub fn log_to_file(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("installing file logger")
}
