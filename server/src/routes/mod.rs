//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the quote API and the node diagnostics endpoints under one Axum
//! router. CORS is wide open because the browser UI may be served from a
//! different origin than the API; unknown paths get a JSON error body.

pub mod quotes;
pub mod system;

use axum::Router;
use axum::routing::{delete, get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full API router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(wire::QUOTES_PATH, get(quotes::list_quotes).post(quotes::create_quote))
        .route(wire::LATEST_QUOTE_PATH, get(quotes::latest_quote))
        .route("/api/quotes/{id}", delete(quotes::delete_quote))
        .route(wire::NODE_INFO_PATH, get(system::node_info))
        .route(wire::DB_STATUS_PATH, get(system::db_status))
        .route(wire::METRICS_PATH, get(system::metrics))
        .route(wire::HEALTH_PATH, get(system::healthz))
        .fallback(system::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
