//! Ticket text cleaning and input validation applied before classification.
//!
//! `clean_text` must stay byte-for-byte compatible with the cleaning the
//! classifier was trained on: removals are deletions, not space
//! replacements, and interior whitespace is left alone.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::extract::normalize::NON_WORD_PATTERN;

pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").unwrap());
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(NON_WORD_PATTERN).unwrap());
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Rejected ticket text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextInputError {
    #[error("Text input is required")]
    Missing,

    #[error("Text input is empty")]
    Empty,

    #[error("Text input exceeds maximum length ({max} characters)")]
    TooLong { max: usize, actual: usize },
}

/// Clean raw ticket text: lower-case, then delete URLs, @mentions,
/// #hashtags, symbols and digit runs, then trim.
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = URL_RE.replace_all(&text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "");
    let text = SYMBOL_RE.replace_all(&text, "");
    let text = DIGITS_RE.replace_all(&text, "");
    text.trim().to_string()
}

/// Validate ticket text before cleaning. Length is counted in chars.
pub fn validate_text_input(text: Option<&str>, max_length: usize) -> Result<(), TextInputError> {
    let text = text.ok_or(TextInputError::Missing)?;

    if text.trim().is_empty() {
        return Err(TextInputError::Empty);
    }

    let actual = text.chars().count();
    if actual > max_length {
        return Err(TextInputError::TooLong {
            max: max_length,
            actual,
        });
    }

    Ok(())
}
