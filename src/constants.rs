//! Constants used throughout the application.
//!
//! This module contains all constants used in the Daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A daily journal with moods, tags, and insights";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Daybook data directory.
pub const ENV_VAR_DAYBOOK_DIR: &str = "DAYBOOK_DIR";
/// Environment variable for the tracing filter (falls back to RUST_LOG).
pub const ENV_VAR_DAYBOOK_LOG: &str = "DAYBOOK_LOG";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for daybook data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".daybook";

// File System Parameters
/// Filename of the SQLite database inside the data directory.
pub const DATABASE_FILENAME: &str = "daybook.db";
/// Filename of the persisted login session inside the data directory.
pub const SESSION_FILENAME: &str = "session.json";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Default number of days covered by the insights report when no range is
/// given (the range is this many days ending today, inclusive).
pub const INSIGHTS_DEFAULT_DAYS: i64 = 30;

// Moods
/// Canonical primary mood labels. These buckets are always present in the
/// mood distribution, even when no entry carries them.
pub const CANONICAL_MOODS: [&str; 3] = ["Positive", "Neutral", "Negative"];
/// Mood recorded when an entry's mood field is blank.
pub const DEFAULT_MOOD: &str = "Neutral";
/// Sentinel reported as the most frequent mood of an empty entry set.
pub const NO_MOOD_SENTINEL: &str = "—";

// Tags
/// Maximum number of tags reported in the "top tags" ranking.
pub const TOP_TAGS_LIMIT: usize = 12;

// Validation
/// Minimum username length.
pub const USERNAME_MIN_LEN: usize = 3;
/// Maximum username length.
pub const USERNAME_MAX_LEN: usize = 20;
/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;
