use std::sync::Arc;

use super::*;
use crate::state::test_helpers;
use crate::store::{QuoteDraft, QuoteStore, StoreError, StoreKind};
use wire::Quote;

/// Store whose database never answers.
struct DownStore;

#[async_trait::async_trait]
impl QuoteStore for DownStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Postgres
    }

    async fn insert(&self, _draft: QuoteDraft) -> Result<Quote, StoreError> {
        Err(StoreError::Unavailable("down".into()))
    }

    async fn latest(&self) -> Result<Option<Quote>, StoreError> {
        Err(StoreError::Unavailable("down".into()))
    }

    async fn list(&self) -> Result<Vec<Quote>, StoreError> {
        Err(StoreError::Unavailable("down".into()))
    }

    async fn delete(&self, _id: i64) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("down".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("down".into()))
    }
}

#[tokio::test]
async fn db_status_reports_connected_embedded_store() {
    let state = test_helpers::test_app_state();
    let Json(status) = db_status(State(state)).await;
    assert_eq!(status.connected, "true");
    assert_eq!(status.kind, "Embedded");
    assert_eq!(status.message, "Embedded database reachable.");
}

#[tokio::test]
async fn db_status_reports_missing_store() {
    let state = test_helpers::unavailable_app_state();
    let Json(status) = db_status(State(state)).await;
    assert!(!status.is_connected());
    assert_eq!(status.kind, "PostgreSQL");
    assert_eq!(status.message, "Database connection unavailable at configured URL.");
}

#[tokio::test]
async fn db_status_reports_failed_ping() {
    let state = AppState::new(Arc::new(DownStore), test_helpers::TEST_APP_NAME);
    let status = check_db(&state).await;
    assert_eq!(status.connected, "false");
    assert_eq!(status.message, "Database ping failed: store unavailable: down");
}

#[tokio::test]
async fn node_info_uses_configured_app_name() {
    let state = test_helpers::test_app_state();
    let Json(info) = node_info(State(state)).await;
    assert_eq!(info.app, test_helpers::TEST_APP_NAME);
}

#[tokio::test]
async fn metrics_reports_store_kind() {
    let state = test_helpers::test_app_state();
    state.metrics.record_read();
    let Json(snapshot) = metrics(State(state)).await;
    assert_eq!(snapshot.store, "Embedded");
    assert_eq!(snapshot.operations.read, 1);
}

#[tokio::test]
async fn healthz_is_up() {
    let Json(body) = healthz().await;
    assert_eq!(body.status, "UP");
    assert!(body.total_memory >= body.free_memory);
}

#[tokio::test]
async fn fallback_is_json_not_found() {
    let (status, Json(body)) = fallback(Uri::from_static("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, FALLBACK_ERROR);
}
