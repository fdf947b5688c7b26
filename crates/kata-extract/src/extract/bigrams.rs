//! Two-word phrase extraction over adjacent tokens.
//!
//! Ranking is by raw frequency; the importance boost used for single words
//! does not apply here.

use super::normalize::{token_len, tokenize};
use super::wordsets::is_stopword;
use super::{sort_by_frequency, FrequencyTable, KeywordResult};

pub const DEFAULT_MAX_BIGRAMS: usize = 5;

/// Minimum char length of each word in a phrase.
pub const BIGRAM_MIN_WORD_LENGTH: usize = 3;

/// Extract up to `max_bigrams` adjacent word pairs, most frequent first.
///
/// Words shorter than [`BIGRAM_MIN_WORD_LENGTH`] are dropped before pairing,
/// so a phrase may join words that were not adjacent in the raw text. A pair
/// is discarded only when both of its words are stopwords.
pub fn extract_bigrams(text: &str, max_bigrams: usize) -> Vec<KeywordResult> {
    let words: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|w| token_len(w) >= BIGRAM_MIN_WORD_LENGTH)
        .collect();

    let mut counts = FrequencyTable::default();
    for pair in words.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if is_stopword(first) && is_stopword(second) {
            continue;
        }
        counts.add(&format!("{} {}", first, second), 1);
    }

    let mut results = counts.into_results();
    sort_by_frequency(&mut results);
    results.truncate(max_bigrams);
    results
}
