//! User account rows.
//!
//! Minimal account storage: creation at registration, lookup by username at
//! login, lookup by id when resolving the saved session. Password hashing
//! happens in the `auth` module; this layer only stores the hash string.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::{params, Connection};
use tracing::debug;

/// Represents a user account in the database.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

/// Creates a new user account. Returns the user ID.
///
/// # Errors
///
/// Returns an error if the username is already taken (unique constraint,
/// case-insensitive) or the database operation fails.
pub fn create_user(
    conn: &Connection,
    username: &str,
    email: &str,
    password_hash: &str,
) -> AppResult<i64> {
    debug!("Creating user '{}'", username);

    conn.execute(
        "INSERT INTO users (username, email, password_hash) VALUES (?1, ?2, ?3)",
        params![username, email, password_hash],
    )
    .map_err(DatabaseError::Sqlite)?;

    let user_id = conn.last_insert_rowid();
    debug!("User created with id {}", user_id);
    Ok(user_id)
}

/// Finds a user by username (case-insensitive).
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no such user exists.
pub fn find_user_by_username(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    debug!("Looking up user '{}'", username);

    let result = conn.query_row(
        "SELECT id, username, email, password_hash, created_at FROM users WHERE username = ?1",
        params![username],
        |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                email: row.get(2)?,
                password_hash: row.get(3)?,
                created_at: row.get(4)?,
            })
        },
    );

    match result {
        Ok(user) => Ok(Some(user)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Gets a user by ID.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if the user doesn't exist, or an error
/// if the database operation fails.
pub fn get_user_by_id(conn: &Connection, user_id: i64) -> AppResult<User> {
    debug!("Getting user id {}", user_id);

    conn.query_row(
        "SELECT id, username, email, password_hash, created_at FROM users WHERE id = ?1",
        params![user_id],
        |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                email: row.get(2)?,
                password_hash: row.get(3)?,
                created_at: row.get(4)?,
            })
        },
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound(format!("User with id {} not found", user_id)).into()
        }
        _ => DatabaseError::Sqlite(e).into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_create_and_find_user() {
        let conn = setup_test_db();

        let user_id = create_user(&conn, "alice", "alice@example.com", "hash123").unwrap();
        assert!(user_id > 0);

        let user = find_user_by_username(&conn, "alice").unwrap().unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password_hash, "hash123");
    }

    #[test]
    fn test_find_user_case_insensitive() {
        let conn = setup_test_db();
        create_user(&conn, "Alice", "alice@example.com", "h").unwrap();

        let user = find_user_by_username(&conn, "alice").unwrap().unwrap();
        assert_eq!(user.username, "Alice");
    }

    #[test]
    fn test_find_user_not_found() {
        let conn = setup_test_db();
        assert!(find_user_by_username(&conn, "nobody").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let conn = setup_test_db();
        create_user(&conn, "alice", "a@example.com", "h").unwrap();

        let result = create_user(&conn, "ALICE", "b@example.com", "h");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_user_by_id() {
        let conn = setup_test_db();
        let user_id = create_user(&conn, "alice", "a@example.com", "h").unwrap();

        let user = get_user_by_id(&conn, user_id).unwrap();
        assert_eq!(user.username, "alice");

        assert!(get_user_by_id(&conn, 999).is_err());
    }
}
