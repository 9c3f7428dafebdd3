use std::io;
use std::path::PathBuf;
use std::time::SystemTimeError;

use thiserror::Error;

/// Failure while writing the end-of-game score token.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write score token to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("system clock is before the unix epoch")]
    Clock(#[from] SystemTimeError),
}

/// Failure while setting up the file logger.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to open log file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("logger already installed")]
    Install(#[from] log::SetLoggerError),
}

/// Top-level failure of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
