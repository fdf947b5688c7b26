//! Keyword extraction for Indonesian support tickets.
//!
//! Used as the fallback when the upstream LLM returns no keywords. Single
//! words are filtered against a stopword list and ranked with a boost for
//! domain vocabulary; two-word phrases are ranked by raw frequency. Every
//! ranking is a stable sort, so equal scores keep first-seen order and the
//! output for a given input is always the same.

pub mod bigrams;
pub mod fallback;
pub mod keywords;
pub mod normalize;
pub mod wordsets;

use std::collections::HashMap;

use kata_core::ExtractDefaults;
use serde::{Deserialize, Serialize};

use self::bigrams::extract_bigrams;
use self::keywords::extract_keywords;

/// A keyword (one word, or two words joined by a space) and its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordResult {
    pub keyword: String,
    pub frequency: usize,
}

impl KeywordResult {
    pub fn new(keyword: impl Into<String>, frequency: usize) -> Self {
        Self {
            keyword: keyword.into(),
            frequency,
        }
    }
}

/// Tuning for [`extract_keywords_and_phrases`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub max_keywords: usize,
    pub max_bigrams: usize,
    pub min_length: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractDefaults::default().into()
    }
}

impl From<ExtractDefaults> for ExtractOptions {
    fn from(d: ExtractDefaults) -> Self {
        Self {
            max_keywords: d.max_keywords,
            max_bigrams: d.max_bigrams,
            min_length: d.min_length,
        }
    }
}

impl ExtractOptions {
    /// Upper bound on the combined result length.
    pub fn result_limit(&self) -> usize {
        self.max_keywords.saturating_add(self.max_bigrams)
    }
}

/// Frequency counter that remembers first-seen order.
#[derive(Debug, Default)]
pub(crate) struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<KeywordResult>,
}

impl FrequencyTable {
    pub(crate) fn add(&mut self, keyword: &str, count: usize) {
        match self.index.get(keyword) {
            Some(&i) => self.entries[i].frequency += count,
            None => {
                self.index.insert(keyword.to_string(), self.entries.len());
                self.entries.push(KeywordResult::new(keyword, count));
            }
        }
    }

    /// Entries in first-seen order.
    pub(crate) fn into_results(self) -> Vec<KeywordResult> {
        self.entries
    }
}

/// Stable sort, highest frequency first.
pub(crate) fn sort_by_frequency(results: &mut [KeywordResult]) {
    results.sort_by(|a, b| b.frequency.cmp(&a.frequency));
}

/// Combined extraction: top single words followed by top phrases, merged by
/// keyword and re-ranked by frequency.
///
/// Returns at most `max_keywords + max_bigrams` entries. A keyword appearing
/// in both lists is emitted once with the summed frequency.
pub fn extract_keywords_and_phrases(text: &str, options: &ExtractOptions) -> Vec<KeywordResult> {
    let unigrams = extract_keywords(text, options.min_length, options.max_keywords);
    let phrases = extract_bigrams(text, options.max_bigrams);

    let mut merged = FrequencyTable::default();
    for r in unigrams.iter().chain(phrases.iter()) {
        merged.add(&r.keyword, r.frequency);
    }

    let mut results = merged.into_results();
    sort_by_frequency(&mut results);
    results.truncate(options.result_limit());
    results
}
