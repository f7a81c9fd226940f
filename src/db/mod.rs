//! Persistence gateway: the `LogStore` seam and its PostgreSQL implementation.

use crate::models::log::{log_record::LogRecord, log_stats::LogStats};
use async_trait::async_trait;
use thiserror::Error;

pub mod postgres;
pub mod search;

pub use postgres::PgLogStore;
pub use search::SearchQuery;

/// Idempotent bootstrap of the single `logs` table.
pub const SCHEMA_SQL: &str = r#"CREATE TABLE IF NOT EXISTS logs (
    id BIGSERIAL PRIMARY KEY,
    cpf TEXT NOT NULL,
    mac_address TEXT NOT NULL,
    horario TIMESTAMPTZ NOT NULL DEFAULT NOW()
)"#;

/// Column list every `LogRecord` query selects.
///
/// Casts let rows decode from tables created outside `SCHEMA_SQL`, such as
/// `id SERIAL` or `horario TIMESTAMP` (read in the session time zone).
pub const RECORD_COLUMNS: &str =
    "id::int8 AS id, cpf::text AS cpf, mac_address::text AS mac_address, horario::timestamptz AS horario";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Everything the HTTP layer needs from storage.
///
/// Each call checks a connection out of the pool and hands it back when the
/// call returns, error or not. Nothing is retried.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Insert one row; the store assigns `id` and `horario`.
    async fn insert_log(&self, cpf: &str, mac_upper: &str) -> Result<LogRecord, StoreError>;

    /// One page, newest first, plus the table's total row count.
    ///
    /// The page and the count are two separate reads; a concurrent insert
    /// may land between them.
    async fn list_logs(&self, limit: i64, offset: i64)
        -> Result<(Vec<LogRecord>, i64), StoreError>;

    async fn compute_stats(&self) -> Result<LogStats, StoreError>;

    async fn search_logs(&self, query: &SearchQuery) -> Result<Vec<LogRecord>, StoreError>;

    /// `SELECT 1` round trip.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Drain pooled connections. Called once on shutdown.
    async fn close(&self);
}
