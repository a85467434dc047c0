//! The insights operation: range resolution, computation, and rendering.
//!
//! Loads a user's entries for a date window, feeds them to the analytics
//! engine, and renders the result either as a plain-text report or as JSON.

use std::fmt::Write as _;

use chrono::{Duration, NaiveDate};
use tracing::info;

use crate::analytics::{self, AnalyticsResult};
use crate::constants::INSIGHTS_DEFAULT_DAYS;
use crate::db::entries;
use crate::db::Database;
use crate::errors::AppResult;

/// Resolves the insights window from optional CLI bounds.
///
/// `to` defaults to today; `from` defaults to a 30-day window ending at `to`.
pub fn resolve_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    let to = to.unwrap_or(today);
    let from = from.unwrap_or_else(|| to - Duration::days(INSIGHTS_DEFAULT_DAYS - 1));
    (from, to)
}

/// Computes insights over a user's entries in `[from, to]`.
///
/// # Errors
///
/// Returns an error if loading the entries fails.
pub fn compute_insights(
    db: &Database,
    user_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<AnalyticsResult> {
    info!("Computing insights from {} to {}", from, to);

    let conn = db.get_conn()?;
    let entries = entries::list_entries_in_range(&conn, user_id, from, to)?;
    Ok(analytics::compute(&entries, from, to))
}

/// Renders the insights result as a plain-text report.
pub fn render_text_report(result: &AnalyticsResult) -> String {
    let mut out = String::new();

    // String formatting can't fail
    let _ = writeln!(out, "Insights {} to {}", result.from, result.to);
    let _ = writeln!(out, "Entries: {}", result.total_entries);
    let _ = writeln!(out);

    let _ = writeln!(out, "Moods:");
    for (mood, count) in &result.mood_counts {
        let percent = result.mood_percentages.get(mood).copied().unwrap_or(0);
        let _ = writeln!(out, "  {:<12} {} ({}%)", mood, count, percent);
    }
    let _ = writeln!(out, "Most frequent mood: {}", result.most_frequent_mood);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Streaks: current {}, longest {}",
        result.current_streak, result.longest_streak
    );

    if result.missed_days.is_empty() {
        let _ = writeln!(out, "Missed days: none");
    } else {
        let days: Vec<String> = result.missed_days.iter().map(|d| d.to_string()).collect();
        let _ = writeln!(
            out,
            "Missed days ({}): {}",
            result.missed_days.len(),
            days.join(", ")
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Top tags:");
    if result.top_tags.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for tag in &result.top_tags {
        let _ = writeln!(out, "  {} ({})", tag.name, tag.count);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Categories:");
    if result.category_breakdown.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for cat in &result.category_breakdown {
        let _ = writeln!(
            out,
            "  {}: {} entries ({}%)",
            cat.name, cat.count, cat.percent
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Average words per day:");
    if result.avg_words_by_day.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (day, words) in &result.avg_words_by_day {
        let _ = writeln!(out, "  {}: {}", day, words);
    }

    out
}
