//! Quote board view state.
//!
//! DESIGN
//! ======
//! Everything the page shows lives here as plain data, and every transition
//! is a synchronous method. The controller in `board` performs the HTTP calls
//! and feeds results in, so rendering rules can be tested without a backend.
//!
//! A quote submitted in this session outranks the server's latest quote for
//! the display panel.

#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

use wire::{DbStatus, NewQuote, NodeInfo, Quote, QuoteReply};

/// Banner text stored when the backend cannot be reached.
pub const CONNECTIVITY_ERROR: &str = "Could not connect to backend or database.";
/// What the banner shows in place of [`CONNECTIVITY_ERROR`].
pub const CONNECTIVITY_BANNER: &str = "Database connection unavailable. Please check your DB settings.";
pub const DELETE_ERROR: &str = "Failed to delete quote.";

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Result of one create call, as the page sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server stored the quote.
    Accepted(Quote),
    /// Well-formed response carrying an `error` field.
    Rejected(String),
    /// Transport failure or non-success status.
    Unreachable,
}

impl From<QuoteReply> for SubmitOutcome {
    fn from(reply: QuoteReply) -> Self {
        match reply {
            QuoteReply::Quote(quote) => Self::Accepted(quote),
            QuoteReply::Error(body) => Self::Rejected(body.error),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteBoardState {
    /// Current text in the quote input. Never cleared by a submit.
    pub input: String,
    /// Quote returned by the last successful submit in this session.
    pub submitted: Option<Quote>,
    /// Server's latest quote at load time.
    pub latest: Option<Quote>,
    /// All quotes, in server order. Local source of truth after load.
    pub quotes: Vec<Quote>,
    /// Raw error text; see [`QuoteBoardState::banner`] for what is shown.
    pub error: Option<String>,
    /// True while a create request is in flight.
    pub loading: bool,
    pub node_info: Option<NodeInfo>,
    pub db_status: Option<DbStatus>,
}

impl QuoteBoardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    // -------------------------------------------------------------------------
    // submit
    // -------------------------------------------------------------------------

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    /// Enter the in-flight state and return the request body.
    ///
    /// Does not check [`QuoteBoardState::can_submit`]; the disabled control is
    /// the only guard.
    pub fn begin_submit(&mut self) -> NewQuote {
        self.error = None;
        self.loading = true;
        NewQuote::new(self.input.clone())
    }

    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted(quote) => {
                self.submitted = Some(quote);
                self.error = None;
            }
            SubmitOutcome::Rejected(message) => {
                self.error = Some(message);
                self.submitted = None;
            }
            SubmitOutcome::Unreachable => {
                self.error = Some(CONNECTIVITY_ERROR.to_owned());
                self.submitted = None;
            }
        }
        self.loading = false;
    }

    // -------------------------------------------------------------------------
    // load
    // -------------------------------------------------------------------------

    pub fn apply_node_info(&mut self, info: Option<NodeInfo>) {
        self.node_info = info;
    }

    /// A `null` body and an `{error}` body both mean "no latest quote".
    pub fn apply_latest(&mut self, reply: Option<QuoteReply>) {
        self.latest = reply.and_then(QuoteReply::into_quote);
    }

    pub fn apply_db_status(&mut self, status: Option<DbStatus>) {
        self.db_status = status;
    }

    pub fn apply_quotes(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
    }

    // -------------------------------------------------------------------------
    // delete
    // -------------------------------------------------------------------------

    /// Drop every local quote with `id`. Unknown ids leave the list as is.
    pub fn remove_quote(&mut self, id: i64) {
        self.quotes.retain(|quote| quote.id != id);
    }

    pub fn fail_delete(&mut self) {
        self.error = Some(DELETE_ERROR.to_owned());
    }

    // -------------------------------------------------------------------------
    // derived view
    // -------------------------------------------------------------------------

    /// Error banner text, with the connectivity message rewritten.
    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.error.as_deref().map(|error| if error == CONNECTIVITY_ERROR { CONNECTIVITY_BANNER } else { error })
    }

    /// Quote for the "Latest Quote" panel: submitted first, then latest.
    #[must_use]
    pub fn display_panel(&self) -> Option<&Quote> {
        self.submitted.as_ref().or(self.latest.as_ref())
    }

    /// "Drop your first quote!" shows only with no quote and no error.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.submitted.is_none() && self.latest.is_none() && self.error.is_none()
    }
}
