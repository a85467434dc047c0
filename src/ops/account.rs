//! Account operations: registration, login, logout, whoami.
//!
//! Registration validates input before anything touches the database; login
//! verifies the stored Argon2 hash and persists a session file that the entry
//! and insights operations resolve on every run.

use std::path::Path;

use tracing::{debug, info};

use crate::auth;
use crate::db::users::{self, User};
use crate::db::Database;
use crate::errors::{AppResult, AuthError};
use crate::session::Session;
use crate::validation;

/// Registers a new account.
///
/// # Flow
///
/// 1. Validate username, email, and password rules
/// 2. Reject usernames that are already taken (case-insensitive)
/// 3. Hash the password and insert the user row
///
/// # Errors
///
/// Returns a `ValidationError` for rule violations, `AuthError::UsernameTaken`
/// for duplicates, or a database error.
pub fn register(db: &Database, username: &str, email: &str, password: &str) -> AppResult<i64> {
    info!("Registering new account");

    validation::validate_username(username)?;
    validation::validate_email(email)?;
    validation::validate_password(password)?;

    let conn = db.get_conn()?;
    if users::find_user_by_username(&conn, username)?.is_some() {
        return Err(AuthError::UsernameTaken(username.to_string()).into());
    }

    let password_hash = auth::hash_password(password)?;
    let user_id = users::create_user(&conn, username, email, &password_hash)?;

    info!("Registered user '{}' with id {}", username, user_id);
    Ok(user_id)
}

/// Logs a user in and saves the session file.
///
/// # Errors
///
/// Returns `AuthError::UnknownUser` if no such account exists,
/// `AuthError::WrongPassword` if the password does not match, or a session
/// write error.
pub fn login(
    db: &Database,
    session_path: &Path,
    username: &str,
    password: &str,
) -> AppResult<Session> {
    debug!("Attempting login");

    let conn = db.get_conn()?;
    let user = users::find_user_by_username(&conn, username)?
        .ok_or_else(|| AuthError::UnknownUser(username.to_string()))?;

    if !auth::verify_password(password, &user.password_hash)? {
        return Err(AuthError::WrongPassword.into());
    }

    let session = Session::new(user.id, user.username.clone());
    session.save(session_path)?;

    info!("User '{}' logged in", user.username);
    Ok(session)
}

/// Logs out by removing the session file. A no-op when not logged in.
pub fn logout(session_path: &Path) -> AppResult<()> {
    Session::clear(session_path)
}

/// Resolves the current session to its user account.
///
/// # Errors
///
/// Returns `SessionError::NotLoggedIn` when no session exists, or
/// `DatabaseError::NotFound` when the session points at a deleted account.
pub fn whoami(db: &Database, session_path: &Path) -> AppResult<User> {
    let session = Session::load(session_path)?;
    let conn = db.get_conn()?;
    users::get_user_by_id(&conn, session.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, ValidationError};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Database) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open(&temp_dir.path().join("test.db")).unwrap();
        db.initialize_schema().unwrap();
        (temp_dir, db)
    }

    #[test]
    fn test_register_and_login() {
        let (temp_dir, db) = setup();
        let session_path = temp_dir.path().join("session.json");

        let user_id = register(&db, "alice", "alice@example.com", "Secret123!").unwrap();
        assert!(user_id > 0);

        let session = login(&db, &session_path, "alice", "Secret123!").unwrap();
        assert_eq!(session.user_id, user_id);
        assert_eq!(session.username, "alice");
        assert!(session_path.exists());
    }

    #[test]
    fn test_register_rejects_invalid_input() {
        let (_temp_dir, db) = setup();

        let result = register(&db, "a!", "alice@example.com", "Secret123!");
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = register(&db, "alice", "not-an-email", "Secret123!");
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::EmailFormat))
        ));

        let result = register(&db, "alice", "alice@example.com", "weak");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_register_rejects_taken_username() {
        let (_temp_dir, db) = setup();
        register(&db, "alice", "a@example.com", "Secret123!").unwrap();

        let result = register(&db, "ALICE", "b@example.com", "Secret123!");
        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::UsernameTaken(_)))
        ));
    }

    #[test]
    fn test_login_unknown_user() {
        let (temp_dir, db) = setup();
        let session_path = temp_dir.path().join("session.json");

        let result = login(&db, &session_path, "nobody", "Secret123!");
        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::UnknownUser(_)))
        ));
    }

    #[test]
    fn test_login_wrong_password() {
        let (temp_dir, db) = setup();
        let session_path = temp_dir.path().join("session.json");
        register(&db, "alice", "a@example.com", "Secret123!").unwrap();

        let result = login(&db, &session_path, "alice", "Wrong456?");
        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::WrongPassword))
        ));
        assert!(!session_path.exists());
    }

    #[test]
    fn test_whoami_roundtrip() {
        let (temp_dir, db) = setup();
        let session_path = temp_dir.path().join("session.json");
        register(&db, "alice", "a@example.com", "Secret123!").unwrap();
        login(&db, &session_path, "alice", "Secret123!").unwrap();

        let user = whoami(&db, &session_path).unwrap();
        assert_eq!(user.username, "alice");

        logout(&session_path).unwrap();
        let result = whoami(&db, &session_path);
        assert!(matches!(result, Err(AppError::Session(_))));
    }
}
