//! Kata Extract: keyword and phrase extraction for Indonesian support tickets,
//! plus the text preprocessing applied before classification.

pub mod extract;
pub mod preprocess;

pub use extract::bigrams::extract_bigrams;
pub use extract::fallback::{resolve_keywords, KeywordSource, ResolvedKeywords};
pub use extract::keywords::extract_keywords;
pub use extract::{extract_keywords_and_phrases, ExtractOptions, KeywordResult};
pub use preprocess::{clean_text, validate_text_input, TextInputError};
