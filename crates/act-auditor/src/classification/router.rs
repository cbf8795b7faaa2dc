use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{RiskTier, SystemProfile};
use super::ClassificationEngine;
use crate::articles;
use crate::checklist;
use crate::reporting::ReportGenerator;

/// Router builder exposing the assessment endpoints.
pub fn assessment_router(engine: Arc<ClassificationEngine>) -> Router {
    Router::new()
        .route("/api/v1/assess", post(assess_handler))
        .route("/api/v1/assess/report", post(report_handler))
        .route("/api/v1/articles", get(article_search_handler))
        .route("/api/v1/articles/:article", get(article_handler))
        .route("/api/v1/checklist/:tier", get(checklist_handler))
        .with_state(engine)
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<ClassificationEngine>>,
    axum::Json(profile): axum::Json<SystemProfile>,
) -> Response {
    let verdict = engine.classify(&profile);
    (StatusCode::OK, axum::Json(verdict)).into_response()
}

pub(crate) async fn report_handler(
    State(engine): State<Arc<ClassificationEngine>>,
    axum::Json(profile): axum::Json<SystemProfile>,
) -> Response {
    let report = ReportGenerator::new(engine).markdown(&profile);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        report,
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleQuery {
    #[serde(default)]
    query: String,
}

pub(crate) async fn article_search_handler(Query(params): Query<ArticleQuery>) -> Response {
    let hits = articles::search(&params.query);
    (StatusCode::OK, axum::Json(hits)).into_response()
}

pub(crate) async fn article_handler(Path(article): Path<String>) -> Response {
    match articles::get(&article) {
        Some(entry) => (StatusCode::OK, axum::Json(entry)).into_response(),
        None => {
            let payload = json!({ "error": format!("unknown article '{article}'") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn checklist_handler(Path(tier): Path<String>) -> Response {
    match RiskTier::from_key(&tier) {
        Some(tier) => {
            let payload = json!({
                "tier": tier.key(),
                "items": checklist::checklist_for(tier),
                "summary": checklist::summary_for(tier),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => {
            let payload = json!({ "error": format!("unknown risk tier '{tier}'") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
