//! Shared JSON model for the quote API.
//!
//! This crate owns the HTTP body shapes used by both `server` and `client`.
//! Field names follow the camelCase JSON the browser UI has always consumed,
//! including the dotted `os.*` keys of the node snapshot.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

// =============================================================================
// PATHS
// =============================================================================

/// Collection endpoint: `GET` lists, `POST` creates.
pub const QUOTES_PATH: &str = "/api/quotes";
/// Most recent quote by sequence number.
pub const LATEST_QUOTE_PATH: &str = "/api/quotes/latest";
pub const NODE_INFO_PATH: &str = "/api/nodeinfo";
pub const DB_STATUS_PATH: &str = "/api/dbstatus";
pub const METRICS_PATH: &str = "/api/metrics";
pub const HEALTH_PATH: &str = "/healthz";

/// Path for a single quote, e.g. `/api/quotes/7`.
#[must_use]
pub fn quote_path(id: i64) -> String {
    format!("{QUOTES_PATH}/{id}")
}

// =============================================================================
// QUOTE
// =============================================================================

/// A stored quote. Created by the server, never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Server-assigned unique identifier.
    pub id: i64,
    /// The quote text.
    pub quote: String,
    /// RFC 3339 UTC instant of creation.
    pub timestamp: String,
    /// Submitter address as seen by the server.
    pub ip: String,
    /// Monotonic sequence number assigned by the server.
    pub quote_number: i64,
}

/// Body of `POST /api/quotes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    #[serde(default)]
    pub quote: String,
}

impl NewQuote {
    #[must_use]
    pub fn new(quote: impl Into<String>) -> Self {
        Self { quote: quote.into() }
    }
}

/// Logical error carried in an otherwise well-formed response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Either a quote or a logical error, as returned by create and latest.
///
/// The error shape is tried first: a quote never carries an `error` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteReply {
    Error(ErrorBody),
    Quote(Quote),
}

impl QuoteReply {
    /// The quote, if this reply is not an error.
    #[must_use]
    pub fn into_quote(self) -> Option<Quote> {
        match self {
            Self::Quote(quote) => Some(quote),
            Self::Error(_) => None,
        }
    }
}

/// Body returned by a successful delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Read-only snapshot of the node serving the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub hostname: String,
    pub app: String,
    #[serde(rename = "os.name")]
    pub os_name: String,
    #[serde(rename = "os.version")]
    pub os_version: String,
    #[serde(rename = "os.arch")]
    pub os_arch: String,
    #[serde(rename = "availableProcessors")]
    pub available_processors: usize,
    #[serde(rename = "maxMemoryMB")]
    pub max_memory_mb: u64,
    #[serde(rename = "totalMemoryMB")]
    pub total_memory_mb: u64,
    #[serde(rename = "freeMemoryMB")]
    pub free_memory_mb: u64,
    pub timestamp: String,
}

/// Database connectivity report.
///
/// `connected` is a string-typed boolean (`"true"` / `"false"`) on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStatus {
    pub connected: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl DbStatus {
    #[must_use]
    pub fn new(connected: bool, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self { connected: connected.to_string(), kind: kind.into(), message: message.into() }
    }

    /// Only the exact string `"true"` counts as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected == "true"
    }
}

/// Liveness body with process-wide memory figures in bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: String,
    pub free_memory: u64,
    pub total_memory: u64,
}

/// Per-operation counters for one store type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationCounts {
    pub create: u64,
    pub read: u64,
    pub delete: u64,
}

/// Snapshot returned by `GET /api/metrics`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Store type the counters belong to, e.g. `Embedded`.
    pub store: String,
    pub operations: OperationCounts,
}
