//! Quote routes: create, latest, list, delete.
//!
//! ERROR HANDLING
//! ==============
//! Logical rejections (blank text) answer 200 with an `{error}` body so the
//! UI can show the server text. Store failures answer 500 and a missing store
//! answers 503, both with an `{error}` body.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use tracing::{info, warn};
use wire::{Ack, ErrorBody, NewQuote, Quote, QuoteReply};

use crate::clock::now_rfc3339;
use crate::state::AppState;
use crate::store::{QuoteDraft, QuoteStore, StoreError};

pub const EMPTY_QUOTE_ERROR: &str = "Quote text must not be empty.";

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Database connection unavailable at configured URL.")]
    Unavailable,
    #[error("Quote {0} not found.")]
    NotFound(i64),
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl RouteError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Unavailable | Self::Store { source: StoreError::Unavailable(_), .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, %status, "quote route failed");
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

fn require_store(state: &AppState) -> Result<&Arc<dyn QuoteStore>, RouteError> {
    state.store.as_ref().ok_or(RouteError::Unavailable)
}

/// First `X-Forwarded-For` entry when present, else the peer address.
pub(crate) fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map_or_else(|| peer.ip().to_string(), str::to_owned)
}

/// `POST /api/quotes`: store a quote and echo it back.
pub async fn create_quote(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(body): Json<NewQuote>,
) -> Result<Json<QuoteReply>, RouteError> {
    let store = require_store(&state)?;
    if body.quote.trim().is_empty() {
        return Ok(Json(QuoteReply::Error(ErrorBody::new(EMPTY_QUOTE_ERROR))));
    }

    let draft = QuoteDraft { quote: body.quote, timestamp: now_rfc3339(), ip: client_ip(&headers, peer) };
    let quote = store
        .insert(draft)
        .await
        .map_err(|source| RouteError::Store { context: "Failed to save quote", source })?;
    state.metrics.record_create();

    info!(id = quote.id, quote_number = quote.quote_number, ip = %quote.ip, "quote created");
    Ok(Json(QuoteReply::Quote(quote)))
}

/// `GET /api/quotes/latest`: highest quote number, or `null`.
pub async fn latest_quote(State(state): State<AppState>) -> Result<Json<Option<Quote>>, RouteError> {
    let store = require_store(&state)?;
    let latest = store
        .latest()
        .await
        .map_err(|source| RouteError::Store { context: "Unexpected error", source })?;
    state.metrics.record_read();
    Ok(Json(latest))
}

/// `GET /api/quotes`: all quotes in sequence order.
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, RouteError> {
    let store = require_store(&state)?;
    let quotes = store
        .list()
        .await
        .map_err(|source| RouteError::Store { context: "Failed to list quotes", source })?;
    state.metrics.record_read();
    Ok(Json(quotes))
}

/// `DELETE /api/quotes/:id`: remove one quote.
pub async fn delete_quote(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Ack>, RouteError> {
    let store = require_store(&state)?;
    let removed = store
        .delete(id)
        .await
        .map_err(|source| RouteError::Store { context: "Failed to delete quote", source })?;
    if !removed {
        return Err(RouteError::NotFound(id));
    }
    state.metrics.record_delete();

    info!(id, "quote deleted");
    Ok(Json(Ack { ok: true }))
}

#[cfg(test)]
#[path = "quotes_test.rs"]
mod tests;
