//! Ingredient name matching
//!
//! Names match when they are equal after trimming and lower-casing. There is
//! no fuzzy matching, plural folding, or synonym table: "Lime" and "Limes" are
//! different ingredients.

/// Normalize an ingredient or item name for comparison
///
/// Absent names normalize to `None`.
pub fn normalize_name(name: Option<&str>) -> Option<String> {
    name.map(|n| n.trim().to_lowercase())
}

/// Whether two names refer to the same stocked item
///
/// An absent name never matches anything, including another absent name.
pub fn names_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (normalize_name(a), normalize_name(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
