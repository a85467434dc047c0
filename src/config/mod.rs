//! Configuration management for the daybook application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The only tunable is the
//! data directory that holds the SQLite database and the session file.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_DIR`: Path to the data directory (defaults to ~/.daybook)
//! - `DAYBOOK_LOG`: Log filter, read by the tracing subscriber in main
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DATABASE_FILENAME, DEFAULT_DATA_SUBDIR, ENV_VAR_DAYBOOK_DIR, ENV_VAR_HOME, SESSION_FILENAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the daybook application.
///
/// Holds the data directory where the database and session file live.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Directory where the database and session file are stored.
    ///
    /// Loaded from the DAYBOOK_DIR environment variable with a fallback to
    /// ~/.daybook if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Reads `DAYBOOK_DIR`, falling back to `~/.daybook`. The path is
    /// expanded with `shellexpand` to handle `~` and environment variable
    /// references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails
    /// - The resulting path is empty
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_DAYBOOK_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty or
    /// relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Creates the data directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    /// Path of the SQLite database inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILENAME)
    }

    /// Path of the session file inside the data directory.
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILENAME)
    }
}
