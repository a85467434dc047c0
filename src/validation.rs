//! Input validation for account registration.
//!
//! Pure rule checks for usernames, email addresses, and passwords. Each
//! function returns the first violated rule as a typed `ValidationError` so
//! the CLI can print a precise message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN};
use crate::errors::ValidationError;

/// Validates a username: 3-20 characters, letters and digits only.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    static USERNAME_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("valid username regex"));

    if username.trim().is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if username.len() < USERNAME_MIN_LEN || username.len() > USERNAME_MAX_LEN {
        return Err(ValidationError::UsernameLength {
            min: USERNAME_MIN_LEN,
            max: USERNAME_MAX_LEN,
        });
    }
    if !USERNAME_RE.is_match(username) {
        return Err(ValidationError::UsernameCharset);
    }

    Ok(())
}

/// Validates an email address shape.
///
/// Deliberately loose: one local part, one `@`, a dotted domain. Full RFC
/// compliance is not the goal for a local account store.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
    });

    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::EmailFormat);
    }

    Ok(())
}

/// Validates password strength: at least 8 characters with one uppercase
/// letter, one digit, and one symbol.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.len() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: PASSWORD_MIN_LEN,
        });
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }
    if !password
        .chars()
        .any(|c| c.is_ascii_punctuation())
    {
        return Err(ValidationError::PasswordMissingSymbol);
    }

    Ok(())
}
