//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// This enum provides detailed, contextual error information for different failure modes
/// when interacting with the SQLite database.
///
/// # Examples
///
/// ```
/// use daybook::errors::DatabaseError;
///
/// let error = DatabaseError::NotFound("Entry for 2026-01-15 not found".to_string());
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}\n\nThis may indicate database connection issues. Try closing other daybook instances.")]
    Pool(#[from] r2d2::Error),

    /// Requested row not found in database.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Custom database error with detailed message.
    #[error("Database error: {0}")]
    Custom(String),
}

/// Represents failures of user input validation rules.
///
/// Each variant names the rule that was violated so callers can surface a
/// precise message to the user. The rules mirror the account registration
/// requirements (username shape, email shape, password strength).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Username is missing or blank.
    #[error("Username is required.")]
    UsernameRequired,

    /// Username is outside the allowed length range.
    #[error("Username must be between {min} and {max} characters long.")]
    UsernameLength {
        /// Minimum allowed length
        min: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Username contains characters other than letters and digits.
    #[error("Username can only contain letters and numbers (no symbols).")]
    UsernameCharset,

    /// Email is missing or blank.
    #[error("Email is required.")]
    EmailRequired,

    /// Email does not look like an email address.
    #[error("Please enter a valid email address (e.g., you@example.com).")]
    EmailFormat,

    /// Password is missing or blank.
    #[error("Password is required.")]
    PasswordRequired,

    /// Password is shorter than the minimum length.
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort {
        /// Minimum allowed length
        min: usize,
    },

    /// Password lacks an uppercase letter.
    #[error("Password must contain at least one capital letter (A-Z).")]
    PasswordMissingUppercase,

    /// Password lacks a digit.
    #[error("Password must contain at least one number (0-9).")]
    PasswordMissingDigit,

    /// Password lacks a symbol.
    #[error("Password must contain at least one symbol (!@#$%^&* etc).")]
    PasswordMissingSymbol,
}

/// Represents specific error cases that can occur around login sessions.
///
/// # Examples
///
/// ```
/// use daybook::errors::SessionError;
///
/// let error = SessionError::NotLoggedIn;
/// assert!(format!("{}", error).contains("log in"));
/// ```
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session file exists; the user must log in first.
    #[error("Not logged in. Run `daybook login` to log in first.")]
    NotLoggedIn,

    /// Session file exists but cannot be parsed.
    #[error("Session file is corrupt: {0}. Run `daybook login` to create a fresh session.")]
    Corrupt(String),

    /// Session file cannot be read or written.
    #[error("Failed to access session file: {0}")]
    Io(#[source] io::Error),
}

/// Represents specific error cases that can occur during account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username already taken at registration time.
    #[error("Username '{0}' is already taken.")]
    UsernameTaken(String),

    /// Login attempted with a username that does not exist.
    #[error("No account found for username '{0}'.")]
    UnknownUser(String),

    /// Login attempted with the wrong password.
    #[error("Incorrect password.")]
    WrongPassword,

    /// Password hashing or verification failed internally.
    #[error("Password hashing failed: {0}")]
    Hash(String),
}

/// Represents all possible errors that can occur in the daybook application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use daybook::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal entry logic (e.g., invalid date formats).
    #[error("Journal error: {0}")]
    Journal(String),

    /// Errors related to database operations.
    ///
    /// This variant uses a dedicated DatabaseError type to provide detailed
    /// information about what went wrong with database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors from user input validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Errors related to the login session.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Errors related to account registration and login.
    #[error("Account error: {0}")]
    Auth(#[from] AuthError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
