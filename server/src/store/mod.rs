//! Quote storage backends.
//!
//! DESIGN
//! ======
//! Handlers talk to a `dyn QuoteStore` so the embedded store and the Postgres
//! store are interchangeable at startup (`REMOTE_DB`). Both assign ids and
//! quote numbers themselves; quote numbers come from a monotonic sequence and
//! are never reused after a delete.

pub mod memory;
pub mod postgres;

use wire::Quote;

pub use memory::MemoryStore;
pub use postgres::PgStore;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Which backend is serving quotes. Reported as the `type` of `/api/dbstatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Embedded,
    Postgres,
}

impl StoreKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Embedded => "Embedded",
            Self::Postgres => "PostgreSQL",
        }
    }
}

/// Server-side fields of a quote about to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDraft {
    pub quote: String,
    pub timestamp: String,
    pub ip: String,
}

// =============================================================================
// TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait QuoteStore: Send + Sync {
    fn kind(&self) -> StoreKind;

    /// Store a quote, assigning its id and next quote number.
    async fn insert(&self, draft: QuoteDraft) -> Result<Quote, StoreError>;

    /// Quote with the highest quote number, if any.
    async fn latest(&self) -> Result<Option<Quote>, StoreError>;

    /// All quotes ordered by quote number.
    async fn list(&self) -> Result<Vec<Quote>, StoreError>;

    /// Remove a quote. Returns `false` when the id is unknown.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Round-trip to the backing database.
    async fn ping(&self) -> Result<(), StoreError>;
}
