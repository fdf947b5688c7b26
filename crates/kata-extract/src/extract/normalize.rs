//! Text normalization shared by unigram and bigram extraction.
//!
//! Lower-cases, turns every char outside Unicode `\w` / `\s` into a space,
//! collapses whitespace runs, and splits into tokens. `\w` is the Unicode
//! class of the `regex` crate, so letters with diacritics and non-Latin
//! scripts stay inside words while punctuation, symbols and emoji split them.
//!
//! Unicode `\w` also admits marks and join controls, which would let emoji
//! components (variation selectors, ZWJ/ZWNJ, the keycap mark) glue onto
//! neighbouring words. Those are treated as non-word explicitly.

use once_cell::sync::Lazy;
use regex::Regex;

/// Chars that are neither word nor whitespace, plus emoji components.
pub(crate) const NON_WORD_PATTERN: &str =
    r"[^\w\s]|[\x{FE00}-\x{FE0F}\x{E0100}-\x{E01EF}\x{200C}\x{200D}\x{20E3}]";

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(NON_WORD_PATTERN).unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw text into a single-space-separated lowercase string.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let spaced = NON_WORD_RE.replace_all(&lower, " ");
    WHITESPACE_RE.replace_all(&spaced, " ").trim().to_string()
}

/// Normalize and split into tokens. Never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Token length in chars, not bytes.
pub fn token_len(token: &str) -> usize {
    token.chars().count()
}
