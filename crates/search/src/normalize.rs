//! Text normalization for search operations
//!
//! Pipeline: lowercase → canonical decomposition (NFD) → drop combining
//!           diacritical marks (U+0300..=U+036F)

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
#[inline]
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalize text for accent- and case-insensitive matching.
///
/// Total over every input; the empty string normalizes to itself.
///
/// # Example
///
/// ```
/// use questlog_search::normalize::normalize_text;
///
/// assert_eq!(normalize_text("Dragão Ancião"), "dragao anciao");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}
