//! Keyword extraction routes.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use kata_extract::{
    clean_text, resolve_keywords, validate_text_input, ExtractOptions, KeywordResult,
    KeywordSource,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Upstream keyword lists shorter than this trigger heuristic extraction.
const MIN_UPSTREAM_KEYWORDS: usize = 1;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/keywords", post(extract_single))
        .route("/keywords/batch", post(extract_batch))
}

// ---------------------------------------------------------------
// Request/Response types
// ---------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct KeywordRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub ticket_id: Option<String>,
    /// Keywords already produced upstream (e.g. by the LLM judge).
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub max_keywords: Option<usize>,
    #[serde(default)]
    pub max_bigrams: Option<usize>,
    #[serde(default)]
    pub min_length: Option<usize>,
}

impl KeywordRequest {
    /// `defaults` with any per-request overrides applied.
    fn options(&self, defaults: ExtractOptions) -> ExtractOptions {
        ExtractOptions {
            max_keywords: self.max_keywords.unwrap_or(defaults.max_keywords),
            max_bigrams: self.max_bigrams.unwrap_or(defaults.max_bigrams),
            min_length: self.min_length.unwrap_or(defaults.min_length),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchKeywordRequest {
    pub texts: Vec<String>,
    #[serde(default)]
    pub ticket_ids: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct KeywordResponse {
    pub ticket_id: Option<String>,
    pub cleaned_text: String,
    pub source: KeywordSource,
    pub keywords: Vec<KeywordResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct BatchKeywordResponse {
    pub results: Vec<KeywordResponse>,
    pub total_processed: usize,
    pub total_processing_time_ms: f64,
}

// ---------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------

/// POST /api/v1/keywords: keywords for one ticket.
async fn extract_single(
    State(state): State<Arc<AppState>>,
    Json(req): Json<KeywordRequest>,
) -> Result<Json<KeywordResponse>, ApiError> {
    let start = Instant::now();

    validate_text_input(req.text.as_deref(), state.config.max_text_length)?;
    let options = req.options(state.default_options());

    let text = req.text.unwrap_or_default();

    let mut response = process(&text, req.ticket_id, req.keywords.as_deref(), &options);
    let elapsed = elapsed_ms(start);
    response.processing_time_ms = Some(elapsed);

    info!(
        "Keywords extracted: ticket_id={:?}, source={:?}, count={}, time={:.2}ms",
        response.ticket_id,
        response.source,
        response.keywords.len(),
        elapsed
    );

    Ok(Json(response))
}

/// POST /api/v1/keywords/batch: heuristic keywords for many tickets.
async fn extract_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BatchKeywordRequest>,
) -> Result<Json<BatchKeywordResponse>, ApiError> {
    let start = Instant::now();

    if req.texts.is_empty() {
        return Err(ApiError::bad_request("Invalid input", "Texts list cannot be empty"));
    }
    let max = state.config.max_batch_size;
    if req.texts.len() > max {
        return Err(ApiError::bad_request(
            "Batch too large",
            format!("Maximum batch size is {}, got {}", max, req.texts.len()),
        ));
    }
    if let Some(ids) = &req.ticket_ids {
        if ids.len() != req.texts.len() {
            return Err(ApiError::bad_request(
                "Invalid input",
                format!(
                    "ticket_ids length ({}) must match texts length ({})",
                    ids.len(),
                    req.texts.len()
                ),
            ));
        }
    }
    for (i, text) in req.texts.iter().enumerate() {
        validate_text_input(Some(text), state.config.max_text_length).map_err(|e| {
            ApiError::bad_request("Invalid input", format!("Text at index {}: {}", i, e))
        })?;
    }

    let options = state.default_options();
    let mut ticket_ids = req.ticket_ids.map(Vec::into_iter);
    let results: Vec<KeywordResponse> = req
        .texts
        .iter()
        .map(|text| {
            let ticket_id = ticket_ids.as_mut().and_then(Iterator::next);
            process(text, ticket_id, None, &options)
        })
        .collect();

    let total_processing_time_ms = elapsed_ms(start);
    info!(
        "Batch keywords extracted: {} tickets, time={:.2}ms",
        results.len(),
        total_processing_time_ms
    );

    Ok(Json(BatchKeywordResponse {
        total_processed: results.len(),
        results,
        total_processing_time_ms,
    }))
}

fn process(
    text: &str,
    ticket_id: Option<String>,
    upstream: Option<&[String]>,
    options: &ExtractOptions,
) -> KeywordResponse {
    let resolved = resolve_keywords(upstream, text, options, MIN_UPSTREAM_KEYWORDS);
    KeywordResponse {
        ticket_id,
        cleaned_text: clean_text(text),
        source: resolved.source,
        keywords: resolved.keywords,
        processing_time_ms: None,
    }
}

/// Milliseconds since `start`, rounded to two decimals.
fn elapsed_ms(start: Instant) -> f64 {
    (start.elapsed().as_secs_f64() * 100_000.0).round() / 100.0
}
