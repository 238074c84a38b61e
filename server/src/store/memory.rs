//! Embedded in-memory quote store, used when `REMOTE_DB` is off.

use tokio::sync::RwLock;
use wire::Quote;

use super::{QuoteDraft, QuoteStore, StoreError, StoreKind};

struct Inner {
    /// Insertion order, which is also quote-number order.
    quotes: Vec<Quote>,
    next_id: i64,
    next_number: i64,
}

pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: RwLock::new(Inner { quotes: Vec::new(), next_id: 1, next_number: 1 }) }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl QuoteStore for MemoryStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Embedded
    }

    async fn insert(&self, draft: QuoteDraft) -> Result<Quote, StoreError> {
        let mut inner = self.inner.write().await;
        let quote = Quote {
            id: inner.next_id,
            quote: draft.quote,
            timestamp: draft.timestamp,
            ip: draft.ip,
            quote_number: inner.next_number,
        };
        inner.next_id += 1;
        inner.next_number += 1;
        inner.quotes.push(quote.clone());
        Ok(quote)
    }

    async fn latest(&self) -> Result<Option<Quote>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.quotes.iter().max_by_key(|q| q.quote_number).cloned())
    }

    async fn list(&self) -> Result<Vec<Quote>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.quotes.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.quotes.len();
        inner.quotes.retain(|q| q.id != id);
        Ok(inner.quotes.len() != before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
