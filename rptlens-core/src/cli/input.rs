use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Read a whole log file into memory.
///
/// Server logs are not guaranteed to be valid UTF-8 (mod names, player names);
/// invalid sequences are replaced rather than rejected.
pub fn read_log(path: &Path) -> Result<String, AppError> {
    let bytes = fs::read(path).map_err(|source| AppError::read_log(path, source))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read log file");

    Ok(text)
}
