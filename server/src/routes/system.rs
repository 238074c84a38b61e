//! Node diagnostics routes: node info, DB status, metrics, health.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Json;
use tracing::debug;
use wire::{DbStatus, ErrorBody, Health, MetricsSnapshot, NodeInfo};

use crate::node::{self, MemoryFigures};
use crate::state::AppState;

pub const FALLBACK_ERROR: &str = "Something went wrong. Please check your request or try again later.";

/// `GET /api/nodeinfo`: snapshot of the serving node.
pub async fn node_info(State(state): State<AppState>) -> Json<NodeInfo> {
    Json(node::snapshot(&state.app_name))
}

/// `GET /api/dbstatus`: whether the configured store answers.
pub async fn db_status(State(state): State<AppState>) -> Json<DbStatus> {
    Json(check_db(&state).await)
}

pub(crate) async fn check_db(state: &AppState) -> DbStatus {
    let kind = state.store_kind.as_str();
    let Some(store) = state.store.as_ref() else {
        return DbStatus::new(false, kind, "Database connection unavailable at configured URL.");
    };
    match store.ping().await {
        Ok(()) => DbStatus::new(true, kind, format!("{kind} database reachable.")),
        Err(e) => DbStatus::new(false, kind, format!("Database ping failed: {e}")),
    }
}

/// `GET /api/metrics`: per-operation counters.
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot(state.store_kind))
}

/// `GET /healthz`: liveness with memory figures.
pub async fn healthz() -> Json<Health> {
    Json(node::health(MemoryFigures::sample()))
}

/// JSON body for paths no route claims.
pub async fn fallback(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    debug!(%uri, "no route");
    (StatusCode::NOT_FOUND, Json(ErrorBody::new(FALLBACK_ERROR)))
}

#[cfg(test)]
#[path = "system_test.rs"]
mod tests;
