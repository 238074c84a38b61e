//! Postgres quote store, used when `REMOTE_DB` is on.
//!
//! Quote numbers come from the `quote_number_seq` column default, so
//! concurrent inserts never race on a count.

use sqlx::PgPool;
use wire::Quote;

use super::{QuoteDraft, QuoteStore, StoreError, StoreKind};

type QuoteRow = (i64, String, String, String, i64);

fn row_to_quote((id, quote, timestamp, ip, quote_number): QuoteRow) -> Quote {
    Quote { id, quote, timestamp, ip, quote_number }
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl QuoteStore for PgStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Postgres
    }

    async fn insert(&self, draft: QuoteDraft) -> Result<Quote, StoreError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            "INSERT INTO quotes (quote, submitted_at, ip) VALUES ($1, $2, $3)
             RETURNING id, quote, submitted_at, ip, quote_number",
        )
        .bind(&draft.quote)
        .bind(&draft.timestamp)
        .bind(&draft.ip)
        .fetch_one(&self.pool)
        .await?;
        Ok(row_to_quote(row))
    }

    async fn latest(&self) -> Result<Option<Quote>, StoreError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            "SELECT id, quote, submitted_at, ip, quote_number FROM quotes ORDER BY quote_number DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(row_to_quote))
    }

    async fn list(&self) -> Result<Vec<Quote>, StoreError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            "SELECT id, quote, submitted_at, ip, quote_number FROM quotes ORDER BY quote_number",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(row_to_quote).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
