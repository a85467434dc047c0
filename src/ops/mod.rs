//! High-level operations for the daybook CLI.
//!
//! This module provides the user-facing operations that orchestrate the core
//! functionality: account registration and login, daily entry management, and
//! the insights report.

pub mod account;
pub mod entry;
pub mod insights;

// Re-export commonly used functions
pub use account::{login, logout, register, whoami};
pub use entry::{delete_entry, list_entries, show_entry, write_entry};
pub use insights::{compute_insights, render_text_report, resolve_range};
