//! # Input Normalization
//!
//! Text preprocessing applied before lattice construction:
//! NFKC normalization plus the `U+2581` word-boundary marker convention
//! used by `SentencePiece`-family vocabularies.

use unicode_normalization::UnicodeNormalization;

/// The word-boundary marker (`U+2581`, "LOWER ONE EIGHTH BLOCK").
///
/// Vocabulary pieces that begin a word are spelled with this marker
/// as their first scalar value.
pub const WORD_BOUNDARY_MARKER: char = '\u{2581}';

/// Normalize input text for encoding.
///
/// Applies NFKC normalization; then, for non-empty text, prepends
/// [`WORD_BOUNDARY_MARKER`] and replaces every ASCII space with it.
/// Empty input stays empty.
pub fn normalize(text: &str) -> String {
    let normalized: String = text.nfkc().collect();
    if normalized.is_empty() {
        return normalized;
    }

    let mut out = String::with_capacity(normalized.len() + WORD_BOUNDARY_MARKER.len_utf8());
    out.push(WORD_BOUNDARY_MARKER);
    for ch in normalized.chars() {
        if ch == ' ' {
            out.push(WORD_BOUNDARY_MARKER);
        } else {
            out.push(ch);
        }
    }
    out
}
