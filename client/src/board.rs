//! Quote board controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `QuoteBoardState` and a `QuoteApi`. `load` runs the four start-up
//! fetches concurrently; `submit` and `delete` are the two user actions. All
//! calls are single attempts with no cancellation, and the state is only
//! touched between awaits.
//!
//! ERROR HANDLING
//! ==============
//! Load failures become empty defaults for the one section that failed and
//! are only logged. Submit and delete failures set the banner.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use tracing::{debug, warn};

use crate::net::api::{ApiError, QuoteApi};
use crate::state::quotes::{QuoteBoardState, SubmitOutcome};
use crate::view;

pub struct QuoteBoard<A> {
    api: A,
    state: QuoteBoardState,
}

impl<A: QuoteApi> QuoteBoard<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api, state: QuoteBoardState::new() }
    }

    #[must_use]
    pub fn state(&self) -> &QuoteBoardState {
        &self.state
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    /// Fetch node info, latest quote, DB status and the quote list at once.
    pub async fn load(&mut self) {
        let (node_info, latest, db_status, quotes) = tokio::join!(
            self.api.node_info(),
            self.api.latest_quote(),
            self.api.db_status(),
            self.api.list_quotes(),
        );

        self.state.apply_node_info(swallow("nodeinfo", node_info));
        self.state.apply_latest(swallow("latest quote", latest).flatten());
        self.state.apply_db_status(swallow("dbstatus", db_status));
        self.state.apply_quotes(swallow("quote list", quotes).unwrap_or_default());
    }

    /// Post the current input. Callers gate on `can_submit`.
    pub async fn submit(&mut self) {
        let body = self.state.begin_submit();
        let outcome = match self.api.create_quote(&body).await {
            Ok(reply) => SubmitOutcome::from(reply),
            Err(e) => {
                warn!(error = %e, "quote submit failed");
                SubmitOutcome::Unreachable
            }
        };
        self.state.finish_submit(outcome);
    }

    /// Delete on the server, then drop the quote locally without re-fetching.
    pub async fn delete(&mut self, id: i64) {
        match self.api.delete_quote(id).await {
            Ok(()) => self.state.remove_quote(id),
            Err(e) => {
                warn!(id, error = %e, "quote delete failed");
                self.state.fail_delete();
            }
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        view::render_page(&self.state)
    }
}

fn swallow<T>(what: &'static str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => {
            debug!(what, "loaded");
            Some(value)
        }
        Err(e) => {
            warn!(what, error = %e, "load failed, showing default");
            None
        }
    }
}
