//! Single-word keyword extraction with stopword filtering and importance boost.

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::{token_len, tokenize};
use super::wordsets::{is_important, is_stopword};
use super::{FrequencyTable, KeywordResult};

pub const DEFAULT_MIN_LENGTH: usize = 3;
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Score multiplier for domain-important tokens.
pub const IMPORTANT_BOOST: usize = 2;

static PURE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Whether a token is made only of digits.
pub fn is_pure_number(token: &str) -> bool {
    PURE_NUMBER_RE.is_match(token)
}

/// Whether a token is left out of unigram counting.
///
/// The length filter applies to important tokens too; importance only
/// overrides stopword suppression.
pub fn should_skip(token: &str, min_length: usize) -> bool {
    token_len(token) < min_length
        || (is_stopword(token) && !is_important(token))
        || is_pure_number(token)
}

/// Ranking weight of a token: its frequency, doubled for important tokens.
pub fn score(token: &str, frequency: usize) -> usize {
    if is_important(token) {
        frequency * IMPORTANT_BOOST
    } else {
        frequency
    }
}

/// Extract up to `max_keywords` single-word keywords, most relevant first.
///
/// Ranking uses [`score`]; equal scores keep first-seen order. The emitted
/// frequency is the raw count, not the boosted score.
pub fn extract_keywords(text: &str, min_length: usize, max_keywords: usize) -> Vec<KeywordResult> {
    let mut counts = FrequencyTable::default();
    for token in tokenize(text) {
        if !should_skip(&token, min_length) {
            counts.add(&token, 1);
        }
    }

    let mut ranked: Vec<(usize, KeywordResult)> = counts
        .into_results()
        .into_iter()
        .map(|r| (score(&r.keyword, r.frequency), r))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked
        .into_iter()
        .take(max_keywords)
        .map(|(_, r)| r)
        .collect()
}
