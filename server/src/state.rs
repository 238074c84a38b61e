//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the quote store, the operation counters, and the app name shown
//! in node diagnostics. The store is optional: with `REMOTE_DB` enabled and
//! the database unreachable at startup, the server still serves diagnostics
//! and answers quote calls with 503.

use std::sync::Arc;

use crate::metrics::QuoteMetrics;
use crate::store::{QuoteStore, StoreKind};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Active store, `None` when the configured database was unreachable.
    pub store: Option<Arc<dyn QuoteStore>>,
    /// Configured store type, reported even when `store` is `None`.
    pub store_kind: StoreKind,
    pub metrics: Arc<QuoteMetrics>,
    pub app_name: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn QuoteStore>, app_name: &str) -> Self {
        Self {
            store_kind: store.kind(),
            store: Some(store),
            metrics: Arc::new(QuoteMetrics::new()),
            app_name: Arc::from(app_name),
        }
    }

    /// State for a configured store that could not be reached.
    #[must_use]
    pub fn unavailable(store_kind: StoreKind, app_name: &str) -> Self {
        Self { store: None, store_kind, metrics: Arc::new(QuoteMetrics::new()), app_name: Arc::from(app_name) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
