/*!
 * Sentence-boundary re-wrapping of translated text.
 *
 * Translated cue text comes back as one string; it is re-wrapped into one
 * visual line per sentence fragment before being written into the block.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// @const: Sentence-ending punctuation followed by whitespace
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.?!])\s+").unwrap());

/// Split text at sentence-ending punctuation (`.`, `?`, `!`) followed by
/// whitespace, one fragment per visual line. Punctuation stays attached to
/// its sentence; the boundary whitespace is consumed.
///
/// The split is purely punctuation-based and will mis-split abbreviations
/// ("Mr. Smith") and decimal-free ordinals. Known limitation, kept as is.
pub fn wrap_sentences(text: &str) -> Vec<String> {
    let broken = SENTENCE_BOUNDARY.replace_all(text, "$1\n");
    broken.split('\n').map(str::to_string).collect()
}
