use axum::http::HeaderValue;

use super::*;
use crate::state::test_helpers::{self, peer};

fn no_headers() -> HeaderMap {
    HeaderMap::new()
}

async fn create(state: &AppState, headers: HeaderMap, text: &str) -> Result<Json<QuoteReply>, RouteError> {
    create_quote(State(state.clone()), ConnectInfo(peer()), headers, Json(NewQuote::new(text))).await
}

// =============================================================================
// client_ip
// =============================================================================

#[test]
fn client_ip_prefers_first_forwarded_entry() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"));
    assert_eq!(client_ip(&headers, peer()), "203.0.113.7");
}

#[test]
fn client_ip_falls_back_to_peer_when_header_blank() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(""));
    assert_eq!(client_ip(&headers, peer()), "192.168.1.20");
    assert_eq!(client_ip(&no_headers(), peer()), "192.168.1.20");
}

// =============================================================================
// create
// =============================================================================

#[tokio::test]
async fn create_returns_stored_quote() {
    let state = test_helpers::test_app_state();
    let Json(reply) = create(&state, no_headers(), "Black and yellow").await.unwrap();
    let quote = reply.into_quote().expect("quote reply");
    assert_eq!(quote.quote, "Black and yellow");
    assert_eq!(quote.ip, "192.168.1.20");
    assert_eq!(quote.quote_number, 1);
    assert!(!quote.timestamp.is_empty());
    assert_eq!(state.metrics.snapshot(state.store_kind).operations.create, 1);
}

#[tokio::test]
async fn create_records_forwarded_ip() {
    let state = test_helpers::test_app_state();
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static("198.51.100.4"));
    let Json(reply) = create(&state, headers, "Roll up").await.unwrap();
    assert_eq!(reply.into_quote().unwrap().ip, "198.51.100.4");
}

#[tokio::test]
async fn create_blank_quote_is_logical_error() {
    let state = test_helpers::test_app_state();
    let Json(reply) = create(&state, no_headers(), "   ").await.unwrap();
    assert_eq!(reply, QuoteReply::Error(ErrorBody::new(EMPTY_QUOTE_ERROR)));
    assert!(state.store.as_ref().unwrap().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_without_store_is_unavailable() {
    let state = test_helpers::unavailable_app_state();
    let err = create(&state, no_headers(), "hello").await.unwrap_err();
    assert!(matches!(err, RouteError::Unavailable));
    assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
}

// =============================================================================
// latest / list
// =============================================================================

#[tokio::test]
async fn latest_is_none_on_empty_store() {
    let state = test_helpers::test_app_state();
    let Json(latest) = latest_quote(State(state)).await.unwrap();
    assert!(latest.is_none());
}

#[tokio::test]
async fn latest_returns_highest_number() {
    let state = test_helpers::test_app_state();
    test_helpers::seed_quotes(&state, &["one", "two", "three"]).await;
    let Json(latest) = latest_quote(State(state)).await.unwrap();
    assert_eq!(latest.unwrap().quote, "three");
}

#[tokio::test]
async fn list_returns_quotes_in_order() {
    let state = test_helpers::test_app_state();
    test_helpers::seed_quotes(&state, &["one", "two"]).await;
    let Json(quotes) = list_quotes(State(state.clone())).await.unwrap();
    let numbers: Vec<i64> = quotes.iter().map(|q| q.quote_number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(state.metrics.snapshot(state.store_kind).operations.read, 1);
}

#[tokio::test]
async fn reads_without_store_are_unavailable() {
    let state = test_helpers::unavailable_app_state();
    assert!(matches!(latest_quote(State(state.clone())).await, Err(RouteError::Unavailable)));
    assert!(matches!(list_quotes(State(state)).await, Err(RouteError::Unavailable)));
}

// =============================================================================
// delete
// =============================================================================

#[tokio::test]
async fn delete_removes_quote() {
    let state = test_helpers::test_app_state();
    let seeded = test_helpers::seed_quotes(&state, &["keep", "drop"]).await;
    let Json(ack) = delete_quote(State(state.clone()), Path(seeded[1].id)).await.unwrap();
    assert!(ack.ok);
    let Json(quotes) = list_quotes(State(state.clone())).await.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].quote, "keep");
    assert_eq!(state.metrics.snapshot(state.store_kind).operations.delete, 1);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let state = test_helpers::test_app_state();
    let err = delete_quote(State(state), Path(77)).await.unwrap_err();
    assert_eq!(err.to_string(), "Quote 77 not found.");
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// RouteError
// =============================================================================

#[test]
fn store_errors_map_to_server_statuses() {
    let unavailable = RouteError::Store { context: "x", source: StoreError::Unavailable("down".into()) };
    assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

    let database = RouteError::Store { context: "Failed to save quote", source: StoreError::Database(sqlx::Error::RowNotFound) };
    assert_eq!(database.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(database.to_string().starts_with("Failed to save quote: database error"));
}
