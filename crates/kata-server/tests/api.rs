//! Router-level tests. Drive the Axum app with `oneshot` (no listener) and
//! check response status codes and JSON shapes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use kata_core::{ExtractDefaults, ServiceConfig};
use kata_server::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(config: ServiceConfig) -> Router {
    build_router(Arc::new(AppState::new(config)))
}

fn app() -> Router {
    app_with(ServiceConfig::default())
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn keywords_of(body: &Value) -> Vec<String> {
    body["keywords"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["keyword"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_service_info() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "kata");
    assert_eq!(body["status"], "running");
    assert_eq!(body["endpoints"]["keywords"], "/api/v1/keywords");
}

#[tokio::test]
async fn test_health_healthy() {
    let (status, body) = send(app(), get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["config_valid"], true);
    assert!(body["timestamp"].is_string());
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_health_unhealthy_with_bad_config() {
    let config = ServiceConfig {
        max_batch_size: 0,
        ..ServiceConfig::default()
    };
    let (status, body) = send(app_with(config), get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["details"]["config_errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_single_heuristic_extraction() {
    let req = post_json(
        "/api/v1/keywords",
        json!({
            "text": "Hi @support! Internet mati total!!! #urgent",
            "ticket_id": "TKT-12345",
        }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticket_id"], "TKT-12345");
    assert_eq!(body["source"], "heuristic");
    assert_eq!(body["cleaned_text"], "hi  internet mati total");
    assert!(body["processing_time_ms"].is_number());

    let kws = keywords_of(&body);
    for expected in ["internet", "mati", "total", "urgent"] {
        assert!(kws.contains(&expected.to_string()), "missing {expected}");
    }
    assert!(kws.len() <= 10);
    for k in body["keywords"].as_array().unwrap() {
        assert!(k["frequency"].as_u64().unwrap() >= 1);
    }
}

#[tokio::test]
async fn test_single_uses_upstream_keywords() {
    let req = post_json(
        "/api/v1/keywords",
        json!({
            "text": "Sinyal lemot dari pagi",
            "keywords": ["Sinyal Lemot", "jaringan"],
        }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "upstream");
    assert_eq!(keywords_of(&body), vec!["sinyal lemot", "jaringan"]);
}

#[tokio::test]
async fn test_single_option_overrides() {
    let req = post_json(
        "/api/v1/keywords",
        json!({
            "text": "internet mati total",
            "max_keywords": 1,
            "max_bigrams": 0,
        }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keywords_of(&body), vec!["internet"]);
}

#[tokio::test]
async fn test_configured_defaults_apply_to_both_endpoints() {
    let config = ServiceConfig {
        extract: ExtractDefaults {
            max_keywords: 1,
            max_bigrams: 0,
            min_length: 3,
        },
        ..ServiceConfig::default()
    };

    let req = post_json("/api/v1/keywords", json!({"text": "internet mati total"}));
    let (status, body) = send(app_with(config.clone()), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keywords_of(&body), vec!["internet"]);

    // A partial override keeps the other configured values.
    let req = post_json(
        "/api/v1/keywords",
        json!({"text": "internet mati total", "max_keywords": 2}),
    );
    let (_, body) = send(app_with(config.clone()), req).await;
    assert_eq!(keywords_of(&body), vec!["internet", "mati"]);

    let req = post_json(
        "/api/v1/keywords/batch",
        json!({"texts": ["internet mati total"]}),
    );
    let (status, body) = send(app_with(config), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(keywords_of(&body["results"][0]), vec!["internet"]);
}

#[tokio::test]
async fn test_zero_limit_ignores_upstream() {
    let req = post_json(
        "/api/v1/keywords",
        json!({
            "text": "internet mati total",
            "keywords": ["internet"],
            "max_keywords": 0,
            "max_bigrams": 0,
        }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "heuristic");
    assert!(keywords_of(&body).is_empty());
}

#[tokio::test]
async fn test_single_rejects_missing_and_blank_text() {
    let (status, body) = send(app(), post_json("/api/v1/keywords", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");
    assert_eq!(body["message"], "Text input is required");

    let (status, body) = send(app(), post_json("/api/v1/keywords", json!({"text": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Text input is empty");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_single_rejects_too_long_text() {
    let config = ServiceConfig {
        max_text_length: 10,
        ..ServiceConfig::default()
    };
    let req = post_json("/api/v1/keywords", json!({"text": "internet mati total"}));
    let (status, body) = send(app_with(config), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Text input exceeds maximum length (10 characters)"
    );
}

#[tokio::test]
async fn test_single_wrong_type_is_unprocessable() {
    let req = post_json("/api/v1/keywords", json!({"text": "ok", "max_keywords": -1}));
    let (status, _) = send(app(), req).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_batch_extraction() {
    let req = post_json(
        "/api/v1/keywords/batch",
        json!({
            "texts": ["internet mati total", "tagihan naik terus"],
            "ticket_ids": ["TKT-1", "TKT-2"],
        }),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_processed"], 2);
    assert!(body["total_processing_time_ms"].is_number());

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["ticket_id"], "TKT-1");
    assert_eq!(results[1]["ticket_id"], "TKT-2");
    assert_eq!(results[1]["keywords"][0]["keyword"], "tagihan");
    assert!(results[0].get("processing_time_ms").is_none());
}

#[tokio::test]
async fn test_batch_validation() {
    let (status, body) = send(app(), post_json("/api/v1/keywords/batch", json!({"texts": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Texts list cannot be empty");

    let req = post_json(
        "/api/v1/keywords/batch",
        json!({"texts": ["internet mati"], "ticket_ids": ["A", "B"]}),
    );
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "ticket_ids length (2) must match texts length (1)"
    );

    let req = post_json("/api/v1/keywords/batch", json!({"texts": ["internet", " "]}));
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Text at index 1: Text input is empty");
}

#[tokio::test]
async fn test_batch_too_large() {
    let config = ServiceConfig {
        max_batch_size: 2,
        ..ServiceConfig::default()
    };
    let req = post_json("/api/v1/keywords/batch", json!({"texts": ["a", "b", "c"]}));
    let (status, body) = send(app_with(config), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Batch too large");
    assert_eq!(body["message"], "Maximum batch size is 2, got 3");
}
