use std::sync::Arc;

use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::classification::{assessment_router, ClassificationEngine, RuleCatalog};

fn router() -> axum::Router {
    let engine = ClassificationEngine::new(Arc::new(RuleCatalog::builtin()))
        .expect("builtin locales validate");
    assessment_router(Arc::new(engine))
}

fn post_json(uri: &str, payload: serde_json::Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&payload).unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn assess_route_returns_a_full_verdict() {
    let payload = json!({
        "name": "CivScore",
        "description": "A social scoring platform",
        "intended_purpose": "Rank citizens",
    });

    let response = router()
        .oneshot(post_json("/api/v1/assess", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("risk_level").and_then(serde_json::Value::as_str),
        Some("Prohibited")
    );
    assert_eq!(
        body.get("risk_score").and_then(serde_json::Value::as_f64),
        Some(1.0)
    );
    assert!(body.get("matched_rules").is_some());
}

#[tokio::test]
async fn report_route_serves_markdown() {
    let payload = json!({
        "name": "Screening Bot",
        "description": "Automated recruitment system screening resumes",
        "intended_purpose": "Rank candidates",
    });

    let response = router()
        .oneshot(post_json("/api/v1/assess/report", payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/markdown"));

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let report = String::from_utf8(body.to_vec()).expect("utf-8 report");
    assert!(report.contains("# AI Act Risk Assessment Report"));
    assert!(report.contains("High Risk"));
}

#[tokio::test]
async fn article_lookup_returns_known_articles() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/articles/5")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("number").and_then(serde_json::Value::as_str),
        Some("5")
    );
}

#[tokio::test]
async fn article_search_filters_by_query() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/articles?query=deepfake")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let hits = body.as_array().expect("array payload");
    assert!(hits
        .iter()
        .any(|hit| hit.get("number").and_then(serde_json::Value::as_str) == Some("50")));

    let response = router()
        .oneshot(
            Request::get("/api/v1/articles?query=")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    let body = read_json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn article_lookup_rejects_unknown_numbers() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/articles/999")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn checklist_route_serves_items_and_summary() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/checklist/high")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body.get("tier").and_then(serde_json::Value::as_str),
        Some("high")
    );
    assert!(body
        .get("items")
        .and_then(serde_json::Value::as_array)
        .map(|items| !items.is_empty())
        .unwrap_or(false));
    assert!(body.get("summary").is_some());
}

#[tokio::test]
async fn checklist_route_rejects_unknown_tiers() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/checklist/astronomical")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
