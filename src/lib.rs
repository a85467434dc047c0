//! # Daybook
//!
//! A daily journaling library with accounts, one-entry-per-day storage, and
//! an insights engine.
//!
//! This library provides the core functionality behind the `daybook` CLI:
//!
//! - Account management with Argon2 password hashing (`auth`, `validation`)
//! - SQLite-backed entry storage, one entry per user per date (`db`)
//! - A pure analytics engine over a slice of entries (`analytics`):
//!   mood distribution, writing streaks, missed days, top tags, category
//!   breakdown, and a word-count trend
//! - High-level operations that tie it all together (`ops`)
//!
//! ## Example
//!
//! ```no_run
//! use daybook::config::Config;
//! use daybook::db::Database;
//! use daybook::ops;
//!
//! # fn main() -> daybook::errors::AppResult<()> {
//! let config = Config::load()?;
//! config.ensure_data_dir()?;
//!
//! let db = Database::open(&config.db_path())?;
//! db.initialize_schema()?;
//!
//! ops::register(&db, "alice", "alice@example.com", "Secret123!")?;
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod auth;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod ops;
pub mod session;
pub mod validation;

// Re-export main types for convenience
pub use analytics::AnalyticsResult;
pub use config::Config;
pub use db::Database;
pub use errors::{AppError, AppResult};
pub use session::Session;
