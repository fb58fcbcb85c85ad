use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Send log records to `path` (appending). The terminal belongs to the
/// dialogs, so nothing is written to stderr. Filter level is fixed at Info.
pub fn init_file_logger(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")
}
