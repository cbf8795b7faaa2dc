use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::classification::{ClassificationEngine, RuleCatalog, SystemProfile, Verdict};

pub(super) fn engine() -> ClassificationEngine {
    ClassificationEngine::new(Arc::new(RuleCatalog::builtin())).expect("builtin locales validate")
}

pub(super) fn empty_catalog_engine() -> ClassificationEngine {
    ClassificationEngine::new(Arc::new(RuleCatalog::empty())).expect("builtin locales validate")
}

pub(super) fn classify(profile: &SystemProfile) -> Verdict {
    engine().classify(profile)
}

pub(super) fn text_profile(name: &str, description: &str, intended_purpose: &str) -> SystemProfile {
    SystemProfile::from_text(name, description, intended_purpose)
}

/// A profile whose free text matches no catalog keyword at all.
pub(super) fn neutral_profile() -> SystemProfile {
    SystemProfile::from_text(
        "Inventory Helper",
        "Suggests warehouse shelf placement for incoming goods",
        "Optimize storage layout",
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
