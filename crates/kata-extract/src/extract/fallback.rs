//! Choose between upstream (LLM-supplied) keywords and heuristic extraction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{extract_keywords_and_phrases, ExtractOptions, FrequencyTable, KeywordResult};

/// Where a keyword list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordSource {
    Upstream,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedKeywords {
    pub source: KeywordSource,
    pub keywords: Vec<KeywordResult>,
}

/// Use upstream keywords when there are at least `min_upstream` usable ones,
/// otherwise fall back to [`extract_keywords_and_phrases`] on `text`.
///
/// A zero result limit yields an empty heuristic result; upstream is only
/// reported as the source when at least one of its keywords is returned.
///
/// Upstream strings are trimmed and lower-cased; blanks are dropped and
/// repeats merge into one entry whose frequency counts the repeats.
pub fn resolve_keywords(
    upstream: Option<&[String]>,
    text: &str,
    options: &ExtractOptions,
    min_upstream: usize,
) -> ResolvedKeywords {
    let mut counts = FrequencyTable::default();
    for raw in upstream.unwrap_or_default() {
        let keyword = raw.trim().to_lowercase();
        if !keyword.is_empty() {
            counts.add(&keyword, 1);
        }
    }
    let mut supplied = counts.into_results();
    let limit = options.result_limit();

    if limit == 0 {
        debug!("Result limit is zero, returning no keywords");
        return ResolvedKeywords {
            source: KeywordSource::Heuristic,
            keywords: Vec::new(),
        };
    }

    if !supplied.is_empty() && supplied.len() >= min_upstream {
        supplied.truncate(limit);
        debug!("Using {} upstream keywords", supplied.len());
        return ResolvedKeywords {
            source: KeywordSource::Upstream,
            keywords: supplied,
        };
    }

    debug!(
        "Upstream supplied {} keywords (need {}), falling back to heuristic extraction",
        supplied.len(),
        min_upstream
    );
    ResolvedKeywords {
        source: KeywordSource::Heuristic,
        keywords: extract_keywords_and_phrases(text, options),
    }
}
