use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::LogError;

const APP_DIR_NAME: &str = "snek";
const LOG_FILE_NAME: &str = "snek.log";

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

#[must_use]
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Routes `log` output to `path`; the terminal itself belongs to the game.
pub fn init(path: &Path, verbose: bool) -> Result<(), LogError> {
    let open_error = |source: io::Error| LogError::Open {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_error)?;
    }
    let file = File::create(path).map_err(open_error)?;

    WriteLogger::init(level_for(verbose), Config::default(), file)?;
    Ok(())
}
