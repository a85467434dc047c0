//! Entry operations: write, show, list, delete.
//!
//! Thin orchestration over the entries table. The one-entry-per-day rule
//! lives in the database layer; this layer resolves connections and maps
//! "no entry" lookups to user-facing errors.

use chrono::NaiveDate;
use tracing::info;

use crate::db::entries::{self, JournalEntry};
use crate::db::Database;
use crate::errors::{AppError, AppResult};

/// Writes or updates the entry for a date. Returns the entry ID.
///
/// Writing to a date that already has an entry edits it in place.
///
/// # Errors
///
/// Returns an error if the database operation fails.
#[allow(clippy::too_many_arguments)]
pub fn write_entry(
    db: &Database,
    user_id: i64,
    entry_date: NaiveDate,
    title: &str,
    content: &str,
    mood: &str,
    secondary_moods: &str,
    tags: &str,
) -> AppResult<i64> {
    let conn = db.get_conn()?;
    let entry_id = entries::upsert_entry(
        &conn,
        user_id,
        entry_date,
        title.trim(),
        content,
        mood.trim(),
        secondary_moods.trim(),
        tags.trim(),
    )?;

    info!("Saved entry {} for {}", entry_id, entry_date);
    Ok(entry_id)
}

/// Shows the entry for a date.
///
/// # Errors
///
/// Returns `AppError::Journal` if no entry exists for that date.
pub fn show_entry(db: &Database, user_id: i64, entry_date: NaiveDate) -> AppResult<JournalEntry> {
    let conn = db.get_conn()?;
    entries::get_entry_by_date(&conn, user_id, entry_date)?
        .ok_or_else(|| AppError::Journal(format!("No entry for {}", entry_date)))
}

/// Lists entries with dates in `[from, to]`, oldest first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries(
    db: &Database,
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<JournalEntry>> {
    let conn = db.get_conn()?;
    entries::list_entries_in_range(&conn, user_id, from, to)
}

/// Deletes the entry for a date.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no entry exists for that date.
pub fn delete_entry(db: &Database, user_id: i64, entry_date: NaiveDate) -> AppResult<()> {
    let conn = db.get_conn()?;
    entries::delete_entry(&conn, user_id, entry_date)?;
    info!("Deleted entry for {}", entry_date);
    Ok(())
}
