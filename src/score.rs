use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::SCORE_TOKEN_FILE_NAME;
use crate::error::ExportError;

/// Returns the token path used when none is given on the command line.
#[must_use]
pub fn default_token_path() -> PathBuf {
    PathBuf::from(SCORE_TOKEN_FILE_NAME)
}

/// Builds the score token: the score followed by the last three digits of
/// the unix time in seconds.
#[must_use]
pub fn score_token(score: u32, unix_seconds: u64) -> String {
    format!("{score}{}", unix_seconds % 1000)
}

/// Writes the token for `score` to `path`, replacing any previous file.
pub fn export_score_token(path: &Path, score: u32) -> Result<String, ExportError> {
    export_score_token_at(path, score, SystemTime::now())
}

fn export_score_token_at(path: &Path, score: u32, now: SystemTime) -> Result<String, ExportError> {
    let unix_seconds = now.duration_since(UNIX_EPOCH)?.as_secs();
    let token = score_token(score, unix_seconds);

    let write_error = |source: io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, &token).map_err(write_error)?;

    Ok(token)
}
