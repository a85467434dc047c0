//! Static tag-to-category mapping for the category breakdown.
//!
//! Tags are free-form user labels, but the insights report groups a known set
//! of them into nine fixed life categories (Work, Health, Travel, ...). The
//! mapping is a compile-time constant; tags it does not recognize belong to no
//! category and are simply absent from the breakdown (they still appear in the
//! top-tags ranking).

/// Category names used in the breakdown.
pub const CATEGORY_WORK: &str = "Work";
pub const CATEGORY_HEALTH: &str = "Health";
pub const CATEGORY_TRAVEL: &str = "Travel";
pub const CATEGORY_RELATIONSHIPS: &str = "Relationships";
pub const CATEGORY_STUDIES: &str = "Studies";
pub const CATEGORY_FINANCE: &str = "Finance";
pub const CATEGORY_SELF_CARE: &str = "Self-care";
pub const CATEGORY_HOBBIES: &str = "Hobbies";
pub const CATEGORY_PERSONAL: &str = "Personal";

/// Looks up the category for a tag, case-insensitively.
///
/// The tag is expected to be already trimmed. Returns `None` for tags that
/// don't belong to any fixed category.
///
/// # Examples
///
/// ```
/// use daybook::analytics::categories::category_for_tag;
///
/// assert_eq!(category_for_tag("yoga"), Some("Health"));
/// assert_eq!(category_for_tag("Career"), Some("Work"));
/// assert_eq!(category_for_tag("llamas"), None);
/// ```
pub fn category_for_tag(tag: &str) -> Option<&'static str> {
    match tag.to_lowercase().as_str() {
        "work" | "career" | "projects" | "planning" => Some(CATEGORY_WORK),
        "health" | "fitness" | "exercise" | "yoga" => Some(CATEGORY_HEALTH),
        "travel" | "vacation" | "holiday" | "nature" => Some(CATEGORY_TRAVEL),
        "family" | "friends" | "relationships" | "parenting" => Some(CATEGORY_RELATIONSHIPS),
        "studies" | "reading" | "writing" | "reflection" => Some(CATEGORY_STUDIES),
        "finance" | "shopping" => Some(CATEGORY_FINANCE),
        "self-care" | "meditation" | "personal growth" | "spirituality" => {
            Some(CATEGORY_SELF_CARE)
        }
        "hobbies" | "music" | "cooking" => Some(CATEGORY_HOBBIES),
        "birthday" | "celebration" => Some(CATEGORY_PERSONAL),
        _ => None,
    }
}
