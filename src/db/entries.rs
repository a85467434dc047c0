//! Entry CRUD operations.
//!
//! This module provides functions for creating, reading, updating, and
//! querying journal entries. Entries are date-only: each user has at most one
//! entry per calendar date, and a write targeting an existing date becomes an
//! update of that day's entry.

use crate::errors::{AppResult, DatabaseError};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

/// Represents a journal entry in the database.
///
/// `mood` holds the primary mood label; `secondary_moods_csv` and `tags_csv`
/// are comma-separated free-text lists as typed by the user. `content` is
/// rich text and may carry HTML markup.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub id: i64,
    pub user_id: i64,
    pub entry_date: NaiveDate,
    pub title: String,
    pub content: String,
    pub mood: String,
    pub secondary_moods_csv: String,
    pub tags_csv: String,
    pub created_at: String,
    pub updated_at: String,
}

fn entry_from_row(row: &Row<'_>) -> Result<JournalEntry, rusqlite::Error> {
    Ok(JournalEntry {
        id: row.get(0)?,
        user_id: row.get(1)?,
        entry_date: NaiveDate::parse_from_str(&row.get::<_, String>(2)?, "%Y-%m-%d").map_err(
            |e| {
                rusqlite::Error::FromSqlConversionFailure(
                    2,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            },
        )?,
        title: row.get(3)?,
        content: row.get(4)?,
        mood: row.get(5)?,
        secondary_moods_csv: row.get(6)?,
        tags_csv: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

const ENTRY_COLUMNS: &str =
    "id, user_id, entry_date, title, content, mood, secondary_moods, tags, created_at, updated_at";

/// Inserts or updates the journal entry for a user and date.
///
/// If an entry already exists for that date, it is updated in place (the
/// one-entry-per-day rule); `created_at` is preserved and `updated_at`
/// refreshed. Returns the entry ID.
///
/// # Errors
///
/// Returns an error if the database operation fails.
#[allow(clippy::too_many_arguments)]
pub fn upsert_entry(
    conn: &Connection,
    user_id: i64,
    entry_date: NaiveDate,
    title: &str,
    content: &str,
    mood: &str,
    secondary_moods_csv: &str,
    tags_csv: &str,
) -> AppResult<i64> {
    debug!("Upserting entry for user {} on {}", user_id, entry_date);

    conn.execute(
        r#"
        INSERT INTO entries (user_id, entry_date, title, content, mood, secondary_moods, tags, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, CURRENT_TIMESTAMP)
        ON CONFLICT(user_id, entry_date) DO UPDATE SET
            title = excluded.title,
            content = excluded.content,
            mood = excluded.mood,
            secondary_moods = excluded.secondary_moods,
            tags = excluded.tags,
            updated_at = CURRENT_TIMESTAMP
        "#,
        params![
            user_id,
            entry_date.to_string(),
            title,
            content,
            mood,
            secondary_moods_csv,
            tags_csv
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let entry_id: i64 = conn
        .query_row(
            "SELECT id FROM entries WHERE user_id = ?1 AND entry_date = ?2",
            params![user_id, entry_date.to_string()],
            |row| row.get(0),
        )
        .map_err(DatabaseError::Sqlite)?;

    debug!("Entry upserted with id {}", entry_id);
    Ok(entry_id)
}

/// Retrieves a user's entry for a specific date.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry exists for the given date.
pub fn get_entry_by_date(
    conn: &Connection,
    user_id: i64,
    entry_date: NaiveDate,
) -> AppResult<Option<JournalEntry>> {
    debug!("Getting entry for user {} on {}", user_id, entry_date);

    let result = conn.query_row(
        &format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE user_id = ?1 AND entry_date = ?2"
        ),
        params![user_id, entry_date.to_string()],
        entry_from_row,
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Retrieves a user's entry by ID.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if the entry doesn't exist or belongs to another user.
pub fn get_entry_by_id(
    conn: &Connection,
    user_id: i64,
    entry_id: i64,
) -> AppResult<Option<JournalEntry>> {
    debug!("Getting entry {} for user {}", entry_id, user_id);

    let result = conn.query_row(
        &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE user_id = ?1 AND id = ?2"),
        params![user_id, entry_id],
        entry_from_row,
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Deletes a user's entry for a specific date.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no entry exists for that date, or an
/// error if the database operation fails.
pub fn delete_entry(conn: &Connection, user_id: i64, entry_date: NaiveDate) -> AppResult<()> {
    debug!("Deleting entry for user {} on {}", user_id, entry_date);

    let rows_affected = conn
        .execute(
            "DELETE FROM entries WHERE user_id = ?1 AND entry_date = ?2",
            params![user_id, entry_date.to_string()],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(
            DatabaseError::NotFound(format!("No entry found for {}", entry_date)).into(),
        );
    }

    Ok(())
}

/// Lists a user's entries with `entry_date` in `[from, to]`, ascending.
///
/// This is the feed for the insights engine and the `list` command.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries_in_range(
    conn: &Connection,
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<JournalEntry>> {
    debug!(
        "Listing entries for user {} between {} and {}",
        user_id, from, to
    );

    let mut stmt = conn
        .prepare(&format!(
            r#"
            SELECT {ENTRY_COLUMNS}
            FROM entries
            WHERE user_id = ?1 AND entry_date >= ?2 AND entry_date <= ?3
            ORDER BY entry_date ASC
            "#
        ))
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map(
            params![user_id, from.to_string(), to.to_string()],
            entry_from_row,
        )
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    debug!("Found {} entries in range", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (username, email, password_hash) VALUES ('alice', 'a@example.com', 'h')",
            [],
        )
        .unwrap();
        conn
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_upsert_entry_insert() {
        let conn = setup_test_db();
        let day = date("2026-01-01");

        let entry_id =
            upsert_entry(&conn, 1, day, "Title", "some text", "Positive", "Calm", "Work").unwrap();
        assert!(entry_id > 0);

        let entry = get_entry_by_date(&conn, 1, day).unwrap().unwrap();
        assert_eq!(entry.id, entry_id);
        assert_eq!(entry.title, "Title");
        assert_eq!(entry.content, "some text");
        assert_eq!(entry.mood, "Positive");
        assert_eq!(entry.secondary_moods_csv, "Calm");
        assert_eq!(entry.tags_csv, "Work");
    }

    #[test]
    fn test_upsert_entry_same_day_updates() {
        let conn = setup_test_db();
        let day = date("2026-01-01");

        let id1 = upsert_entry(&conn, 1, day, "First", "v1", "Neutral", "", "").unwrap();
        let id2 = upsert_entry(&conn, 1, day, "Second", "v2", "Positive", "", "Work").unwrap();

        // Writing twice on one day edits the same entry
        assert_eq!(id1, id2);

        let entry = get_entry_by_date(&conn, 1, day).unwrap().unwrap();
        assert_eq!(entry.title, "Second");
        assert_eq!(entry.content, "v2");
        assert_eq!(entry.mood, "Positive");

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_get_entry_by_date_not_found() {
        let conn = setup_test_db();
        let result = get_entry_by_date(&conn, 1, date("2026-01-01")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_get_entry_by_id_scoped_to_user() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO users (username, email, password_hash) VALUES ('bob', 'b@example.com', 'h')",
            [],
        )
        .unwrap();

        let entry_id =
            upsert_entry(&conn, 1, date("2026-01-01"), "t", "c", "Neutral", "", "").unwrap();

        assert!(get_entry_by_id(&conn, 1, entry_id).unwrap().is_some());
        // Another user can't see it
        assert!(get_entry_by_id(&conn, 2, entry_id).unwrap().is_none());
    }

    #[test]
    fn test_delete_entry() {
        let conn = setup_test_db();
        let day = date("2026-01-01");
        upsert_entry(&conn, 1, day, "t", "c", "Neutral", "", "").unwrap();

        delete_entry(&conn, 1, day).unwrap();
        assert!(get_entry_by_date(&conn, 1, day).unwrap().is_none());
    }

    #[test]
    fn test_delete_entry_not_found() {
        let conn = setup_test_db();
        let result = delete_entry(&conn, 1, date("2026-01-01"));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_entries_in_range_ordered() {
        let conn = setup_test_db();
        upsert_entry(&conn, 1, date("2026-01-05"), "", "", "Neutral", "", "").unwrap();
        upsert_entry(&conn, 1, date("2026-01-01"), "", "", "Neutral", "", "").unwrap();
        upsert_entry(&conn, 1, date("2026-01-03"), "", "", "Neutral", "", "").unwrap();
        // Outside the range
        upsert_entry(&conn, 1, date("2026-02-01"), "", "", "Neutral", "", "").unwrap();

        let entries = list_entries_in_range(&conn, 1, date("2026-01-01"), date("2026-01-31"))
            .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].entry_date, date("2026-01-01"));
        assert_eq!(entries[1].entry_date, date("2026-01-03"));
        assert_eq!(entries[2].entry_date, date("2026-01-05"));
    }

    #[test]
    fn test_list_entries_scoped_to_user() {
        let conn = setup_test_db();
        conn.execute(
            "INSERT INTO users (username, email, password_hash) VALUES ('bob', 'b@example.com', 'h')",
            [],
        )
        .unwrap();
        upsert_entry(&conn, 1, date("2026-01-01"), "", "", "Neutral", "", "").unwrap();
        upsert_entry(&conn, 2, date("2026-01-02"), "", "", "Neutral", "", "").unwrap();

        let entries = list_entries_in_range(&conn, 2, date("2026-01-01"), date("2026-01-31"))
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, 2);
    }
}
