//! Insights engine: aggregate analytics over journal entries.
//!
//! This module computes the dashboard analytics for a user's entries within an
//! inclusive date range:
//!
//! - Mood distribution (Positive/Neutral/Negative) with percentages
//! - Most frequent mood
//! - Current streak (consecutive days ending at the `to` date)
//! - Longest streak within the range
//! - Missed days (dates with no entries between `from` and `to`)
//! - Most used tags (top 12)
//! - Category breakdown (entries per tag category: Work/Health/Travel...)
//! - Word count trend (average words per entry per day)
//!
//! The engine is a pure function over an in-memory batch of records: no I/O,
//! no clock reads, no errors. Malformed metadata (stray commas, whitespace,
//! unknown mood labels) is normalized or kept as-is, never rejected. Entries
//! outside the requested range are ignored defensively, and duplicate entries
//! on one date are each counted (one-entry-per-day is the store's invariant,
//! not this engine's).

pub mod categories;
pub mod text;

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::constants::{CANONICAL_MOODS, DEFAULT_MOOD, NO_MOOD_SENTINEL, TOP_TAGS_LIMIT};
use crate::db::entries::JournalEntry;
use categories::category_for_tag;
use text::{count_words, split_csv, strip_html};

/// A ranked label with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// A ranked label with its occurrence count and percentage of total entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCountPct {
    pub name: String,
    pub count: usize,
    pub percent: u32,
}

/// Immutable snapshot of the analytics for one `[from, to]` request.
///
/// All maps are ordered for deterministic rendering. Mood and tag keys carry
/// the first-seen original casing; lookups during accumulation were
/// case-insensitive.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResult {
    pub from: NaiveDate,
    pub to: NaiveDate,

    pub total_entries: usize,

    /// Per-mood entry counts. The three canonical moods are always present.
    pub mood_counts: BTreeMap<String, usize>,
    /// Per-mood percentage of total entries (round-half-to-even).
    pub mood_percentages: BTreeMap<String, u32>,
    /// Mood with the highest count (ties broken alphabetically), or the
    /// `"—"` sentinel when there are no entries.
    pub most_frequent_mood: String,

    /// Consecutive days with entries, counting backward from `to`.
    pub current_streak: u32,
    /// Longest run of consecutive days with entries inside the range.
    pub longest_streak: u32,
    /// Dates in `[from, to]` with no entry, ascending.
    pub missed_days: Vec<NaiveDate>,

    /// Most used tags, count descending then name ascending, capped at 12.
    pub top_tags: Vec<NameCount>,
    /// Entries per tag category, same ranking as tags. Categories overlap:
    /// one entry can count toward several.
    pub category_breakdown: Vec<NameCountPct>,

    /// Average words per entry for each day that has at least one entry.
    pub avg_words_by_day: BTreeMap<NaiveDate, u32>,
}

/// Computes the full analytics snapshot for entries in `[from, to]`.
///
/// The caller supplies the user's entries for the range (the engine filters
/// out-of-range records defensively). A reversed range (`from > to`) produces
/// the empty result: zero counts, sentinel mood, no missed days.
pub fn compute(entries: &[JournalEntry], from: NaiveDate, to: NaiveDate) -> AnalyticsResult {
    let in_range: Vec<&JournalEntry> = entries
        .iter()
        .filter(|e| e.entry_date >= from && e.entry_date <= to)
        .collect();
    let total_entries = in_range.len();

    debug!(
        total = total_entries,
        %from,
        %to,
        "Computing insights"
    );

    // Fast lookup set of dates that have entries.
    let entry_dates: HashSet<NaiveDate> = in_range.iter().map(|e| e.entry_date).collect();

    // -------------------------
    // Mood distribution
    // -------------------------
    // Accumulate keyed by the case-folded label, remembering the first-seen
    // display casing. The canonical buckets are seeded so charts always show
    // all three, even at zero.
    let mut mood_acc: HashMap<String, (String, usize)> = HashMap::new();
    for mood in CANONICAL_MOODS {
        mood_acc.insert(mood.to_lowercase(), (mood.to_string(), 0));
    }
    for entry in &in_range {
        let display = normalize_primary_mood(&entry.mood);
        let folded = display.to_lowercase();
        mood_acc
            .entry(folded)
            .and_modify(|(_, count)| *count += 1)
            .or_insert((display, 1));
    }

    let mood_counts: BTreeMap<String, usize> = mood_acc
        .into_values()
        .map(|(display, count)| (display, count))
        .collect();

    let mood_percentages: BTreeMap<String, u32> = mood_counts
        .iter()
        .map(|(display, &count)| (display.clone(), percentage(count, total_entries)))
        .collect();

    let most_frequent_mood = if total_entries == 0 {
        NO_MOOD_SENTINEL.to_string()
    } else {
        mood_counts
            .iter()
            .max_by(|(name_a, count_a), (name_b, count_b)| {
                // Highest count wins; ties go to the alphabetically first
                // label, so compare names in reverse for max_by.
                count_a.cmp(count_b).then_with(|| name_b.cmp(name_a))
            })
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| NO_MOOD_SENTINEL.to_string())
    };

    // -------------------------
    // Missed days
    // -------------------------
    let mut missed_days = Vec::new();
    let mut day = from;
    while day <= to {
        if !entry_dates.contains(&day) {
            missed_days.push(day);
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    // -------------------------
    // Streaks
    // -------------------------
    let current_streak = current_streak_ending_at(to, &entry_dates);
    let longest_streak = longest_streak_in_range(from, to, &entry_dates);

    // -------------------------
    // Tags (most used)
    // -------------------------
    // split_csv de-duplicates within one entry, so a tag repeated on the same
    // day still contributes once.
    let mut tag_acc: HashMap<String, (String, usize)> = HashMap::new();
    for entry in &in_range {
        for tag in split_csv(&entry.tags_csv) {
            let folded = tag.to_lowercase();
            tag_acc
                .entry(folded)
                .and_modify(|(_, count)| *count += 1)
                .or_insert((tag, 1));
        }
    }

    let mut top_tags: Vec<NameCount> = tag_acc
        .into_values()
        .map(|(name, count)| NameCount { name, count })
        .collect();
    top_tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    top_tags.truncate(TOP_TAGS_LIMIT);

    // -------------------------
    // Category breakdown
    // -------------------------
    // Counts entries, not tags: an entry whose tags map to the same category
    // twice still counts once for that category.
    let mut category_counts: HashMap<&'static str, usize> = HashMap::new();
    for entry in &in_range {
        let entry_categories: HashSet<&'static str> = split_csv(&entry.tags_csv)
            .iter()
            .filter_map(|tag| category_for_tag(tag))
            .collect();
        for category in entry_categories {
            *category_counts.entry(category).or_insert(0) += 1;
        }
    }

    let mut category_breakdown: Vec<NameCountPct> = category_counts
        .into_iter()
        .map(|(name, count)| NameCountPct {
            name: name.to_string(),
            count,
            percent: percentage(count, total_entries),
        })
        .collect();
    category_breakdown.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    // -------------------------
    // Word count trend
    // -------------------------
    let mut day_totals: HashMap<NaiveDate, (usize, usize)> = HashMap::new();
    for entry in &in_range {
        let words = count_words(&strip_html(&entry.content));
        let (total_words, entry_count) = day_totals.entry(entry.entry_date).or_insert((0, 0));
        *total_words += words;
        *entry_count += 1;
    }

    let avg_words_by_day: BTreeMap<NaiveDate, u32> = day_totals
        .into_iter()
        .map(|(day, (total_words, entry_count))| (day, average(total_words, entry_count)))
        .collect();

    AnalyticsResult {
        from,
        to,
        total_entries,
        mood_counts,
        mood_percentages,
        most_frequent_mood,
        current_streak,
        longest_streak,
        missed_days,
        top_tags,
        category_breakdown,
        avg_words_by_day,
    }
}

/// Normalizes an entry's primary mood label.
///
/// Trims whitespace and maps case-insensitive matches of the canonical labels
/// to their canonical casing. A blank mood defaults to Neutral; anything else
/// is kept as its own label so unexpected data still shows up in the
/// distribution.
fn normalize_primary_mood(mood: &str) -> String {
    let trimmed = mood.trim();
    if trimmed.is_empty() {
        return DEFAULT_MOOD.to_string();
    }
    for canonical in CANONICAL_MOODS {
        if trimmed.eq_ignore_ascii_case(canonical) {
            return canonical.to_string();
        }
    }
    trimmed.to_string()
}

/// Counts consecutive has-entry days walking backward from `end`.
///
/// Stops at the first date with no entry. The walk is bounded only by the
/// contiguity of the has-entry set, which the caller has already restricted
/// to the requested range.
fn current_streak_ending_at(end: NaiveDate, entry_dates: &HashSet<NaiveDate>) -> u32 {
    let mut streak = 0;
    let mut check = end;

    while entry_dates.contains(&check) {
        streak += 1;
        match check.pred_opt() {
            Some(prev) => check = prev,
            None => break,
        }
    }

    streak
}

/// Finds the longest run of consecutive has-entry days in `[from, to]`.
///
/// Single forward pass with a running counter that resets on every gap.
fn longest_streak_in_range(from: NaiveDate, to: NaiveDate, entry_dates: &HashSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut current = 0;

    let mut day = from;
    while day <= to {
        if entry_dates.contains(&day) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    longest
}

/// Integer percentage of `count` out of `total`, round-half-to-even.
///
/// Returns 0 for an empty total rather than dividing by zero.
fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 * 100.0 / total as f64).round_ties_even() as u32
}

/// Average words per entry for one day, round-half-to-even.
fn average(total_words: usize, entry_count: usize) -> u32 {
    if entry_count == 0 {
        return 0;
    }
    (total_words as f64 / entry_count as f64).round_ties_even() as u32
}
