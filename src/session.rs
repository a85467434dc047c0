//! Login session management.
//!
//! The CLI process is short-lived, so the "currently logged in user" state
//! lives in a small JSON file inside the data directory. `login` writes it,
//! `logout` removes it, and every entry command resolves it before touching
//! the database.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{AppResult, SessionError};

/// The persisted login session: which user the CLI is acting as.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
}

impl Session {
    /// Creates a session for the given user.
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Writes the session file, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        debug!("Saving session for user '{}'", self.username);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        fs::write(path, json).map_err(SessionError::Io)?;

        info!("Session saved");
        Ok(())
    }

    /// Loads the current session from the session file.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` if no session file exists,
    /// `SessionError::Corrupt` if it cannot be parsed, or `SessionError::Io`
    /// for other read failures.
    pub fn load(path: &Path) -> AppResult<Session> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SessionError::NotLoggedIn.into())
            }
            Err(e) => return Err(SessionError::Io(e).into()),
        };

        let session: Session =
            serde_json::from_str(&json).map_err(|e| SessionError::Corrupt(e.to_string()))?;
        debug!("Loaded session for user '{}'", session.username);
        Ok(session)
    }

    /// Removes the session file. Succeeds when no session exists.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if the file exists but cannot be removed.
    pub fn clear(path: &Path) -> AppResult<()> {
        match fs::remove_file(path) {
            Ok(()) => {
                info!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e).into()),
        }
    }
}
