//! Accent-insensitive text normalization.
//!
//! The geocoding service matches better on unaccented input, so free-text
//! address fields are stripped of diacritics before being sent.

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

/// Strip diacritical marks from `text`.
///
/// The input is decomposed (NFD), non-spacing marks (`Mn`) are dropped and
/// the remainder recomposed (NFC). Spacing marks such as Indic vowel signs
/// are kept, so non-Latin scripts pass through unchanged.
///
/// ```
/// use order_gate_core::text::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Ségur"), "Segur");
/// assert_eq!(strip_diacritics("Paris"), "Paris");
/// ```
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_nonspacing_mark(*c))
        .nfc()
        .collect()
}

fn is_nonspacing_mark(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::NonspacingMark)
}
