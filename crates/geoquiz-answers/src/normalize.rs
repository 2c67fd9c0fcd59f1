//! Text normalization for answer comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds a place name to its comparison form.
///
/// Lowercases, strips diacritics (NFD then drop combining marks), removes
/// everything that is not alphanumeric or whitespace, and collapses runs of
/// whitespace to a single space with no leading or trailing space.
#[must_use]
pub fn normalize_capital_name(name: &str) -> String {
    let stripped: String = name
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
