//! Text helpers for the insights engine.
//!
//! Entry content is rich text (it may carry HTML markup), and the mood/tag
//! metadata fields are comma-separated strings entered by hand. These helpers
//! normalize both into clean values: stripped plain text for word counting and
//! trimmed, de-duplicated label lists for tag statistics.

use once_cell::sync::Lazy;
use regex::Regex;

/// Splits a comma-separated field into trimmed, non-empty labels,
/// de-duplicated case-insensitively.
///
/// The first-seen casing of each label is preserved, so `"Work, work, WORK"`
/// yields `["Work"]`. Malformed input (empty string, stray commas, whitespace
/// noise) degrades to an empty or shorter list rather than an error.
pub fn split_csv(csv: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut labels: Vec<String> = Vec::new();

    for token in csv.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let folded = token.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        labels.push(token.to_string());
    }

    labels
}

/// Strips HTML markup from rich text content.
///
/// Removes anything that looks like a tag, decodes HTML entities, and trims
/// surrounding whitespace. The result is suitable for word counting and plain
/// text previews.
///
/// # Examples
///
/// ```
/// use daybook::analytics::text::strip_html;
///
/// assert_eq!(strip_html("<p>Hello, <b>world</b>!</p>"), "Hello, world!");
/// ```
pub fn strip_html(html: &str) -> String {
    static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

    if html.trim().is_empty() {
        return String::new();
    }

    let no_tags = TAG_RE.replace_all(html, "");
    decode_entities(&no_tags).trim().to_string()
}

/// Counts words in plain text using a Unicode-aware word definition.
///
/// A word is a maximal run of letters, digits, or apostrophes, so "don't"
/// counts once and punctuation never splits into phantom words.
///
/// # Examples
///
/// ```
/// use daybook::analytics::text::count_words;
///
/// assert_eq!(count_words("Hello, world!"), 2);
/// assert_eq!(count_words("don't stop"), 2);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(text: &str) -> usize {
    static WORD_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[\p{L}\p{N}']+").expect("valid word regex"));

    if text.trim().is_empty() {
        return 0;
    }

    WORD_RE.find_iter(text).count()
}

/// Decodes the common HTML entities produced by rich text editors.
///
/// Handles the named entities for the markup-significant characters plus
/// non-breaking spaces, and numeric character references in decimal
/// (`&#8217;`) and hex (`&#x2019;`) form. Unrecognized entities are left
/// as-is.
fn decode_entities(text: &str) -> String {
    static ENTITY_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"&(#x?[0-9a-fA-F]+|[a-zA-Z]+);").expect("valid entity regex"));

    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            match name {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                "nbsp" => " ".to_string(),
                _ => {
                    let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                        u32::from_str_radix(hex, 16).ok()
                    } else if let Some(dec) = name.strip_prefix('#') {
                        dec.parse::<u32>().ok()
                    } else {
                        None
                    };
                    match code.and_then(char::from_u32) {
                        Some(c) => c.to_string(),
                        None => caps[0].to_string(),
                    }
                }
            }
        })
        .into_owned()
}
