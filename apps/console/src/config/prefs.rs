use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Environment variable overriding the preference file location.
pub const PREFS_PATH_VAR: &str = "CONSOLE_PREFS_PATH";

const DEFAULT_PREFS_FILE: &str = "console-prefs.json";

/// Resolve the on-disk location of the preference file.
///
/// Honors `CONSOLE_PREFS_PATH` when set; otherwise the file lives in the
/// current working directory. An empty override is a configuration error
/// rather than a silent fallback.
pub fn prefs_path() -> Result<PathBuf, AppError> {
    match env::var(PREFS_PATH_VAR) {
        Ok(value) if value.trim().is_empty() => Err(AppError::config(format!(
            "{PREFS_PATH_VAR} is set but empty"
        ))),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(DEFAULT_PREFS_FILE)),
    }
}
