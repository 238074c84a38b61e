//! REST API client for the quote backend.
//!
//! `QuoteApi` is the seam the board controller talks to; `HttpQuoteApi` is
//! the `reqwest` implementation used by the CLI.
//!
//! ERROR HANDLING
//! ==============
//! Any transport failure, non-2xx status, or undecodable body is an
//! `ApiError`. Callers fold all of them into the single connectivity channel;
//! logical errors travel inside `QuoteReply::Error` instead.

use serde::de::DeserializeOwned;
use wire::{DbStatus, Health, NewQuote, NodeInfo, Quote, QuoteReply};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{path} answered HTTP {status}")]
    Status { status: u16, path: String },
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[async_trait::async_trait]
pub trait QuoteApi: Send + Sync {
    /// `POST /api/quotes`.
    async fn create_quote(&self, body: &NewQuote) -> Result<QuoteReply, ApiError>;

    /// `GET /api/quotes/latest`; `None` for a `null` body.
    async fn latest_quote(&self) -> Result<Option<QuoteReply>, ApiError>;

    /// `GET /api/quotes`.
    async fn list_quotes(&self) -> Result<Vec<Quote>, ApiError>;

    /// `DELETE /api/quotes/:id`. The response body is ignored.
    async fn delete_quote(&self, id: i64) -> Result<(), ApiError>;

    /// `GET /api/nodeinfo`.
    async fn node_info(&self) -> Result<NodeInfo, ApiError>;

    /// `GET /api/dbstatus`.
    async fn db_status(&self) -> Result<DbStatus, ApiError>;
}

// =============================================================================
// HTTP IMPLEMENTATION
// =============================================================================

#[derive(Debug, Clone)]
pub struct HttpQuoteApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuoteApi {
    /// Build a client rooted at `base_url` (e.g. `http://127.0.0.1:3000`).
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self { client: reqwest::Client::new(), base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn check(response: reqwest::Response, path: &str) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), path: path.to_owned() });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        Ok(Self::check(response, path)?.json::<T>().await?)
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or not healthy.
    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get_json(wire::HEALTH_PATH).await
    }
}

#[async_trait::async_trait]
impl QuoteApi for HttpQuoteApi {
    async fn create_quote(&self, body: &NewQuote) -> Result<QuoteReply, ApiError> {
        let response = self.client.post(self.url(wire::QUOTES_PATH)).json(body).send().await?;
        Ok(Self::check(response, wire::QUOTES_PATH)?.json::<QuoteReply>().await?)
    }

    async fn latest_quote(&self) -> Result<Option<QuoteReply>, ApiError> {
        self.get_json(wire::LATEST_QUOTE_PATH).await
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>, ApiError> {
        self.get_json(wire::QUOTES_PATH).await
    }

    async fn delete_quote(&self, id: i64) -> Result<(), ApiError> {
        let path = wire::quote_path(id);
        let response = self.client.delete(self.url(&path)).send().await?;
        Self::check(response, &path)?;
        Ok(())
    }

    async fn node_info(&self) -> Result<NodeInfo, ApiError> {
        self.get_json(wire::NODE_INFO_PATH).await
    }

    async fn db_status(&self) -> Result<DbStatus, ApiError> {
        self.get_json(wire::DB_STATUS_PATH).await
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ApiError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
