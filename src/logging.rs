use log::{LevelFilter, SetLoggerError};
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::Path;
use thiserror::Error;

/// Send log messages at or above `level` to the file at `path`, truncating it
/// first.  The terminal belongs to the game, so logs never go to stderr.
pub(crate) fn init(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let file = fs_err::File::create(path)?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Debug)
        .build();
    WriteLogger::init(level, config, file)?;
    log::debug!("Logging to {} at level {level}", path.display());
    Ok(())
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to open log file")]
    Open(#[from] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] SetLoggerError),
}
