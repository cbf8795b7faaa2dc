use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use act_auditor::classification::RuleCatalog;
use act_auditor::config::CatalogConfig;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Resolve the rule catalog from configuration. A configured path that fails
/// to load degrades to an empty catalog; no path at all means the built-in
/// catalog ships.
pub(crate) fn load_catalog(config: &CatalogConfig) -> RuleCatalog {
    match &config.rules_path {
        Some(path) => RuleCatalog::load_or_empty(path),
        None => RuleCatalog::builtin(),
    }
}
