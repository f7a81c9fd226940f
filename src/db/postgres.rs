//! `LogStore` backed by a sqlx PostgreSQL pool.

use super::{LogStore, SearchQuery, StoreError, SCHEMA_SQL};
use crate::{
    config::DbConfig,
    models::log::{
        log_record::LogRecord,
        log_stats::{LogStats, LogTotals},
    },
};
use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

// Keep the RETURNING / SELECT lists in step with `RECORD_COLUMNS`.
const INSERT_SQL: &str = "INSERT INTO logs (cpf, mac_address, horario) VALUES ($1, $2, NOW()) \
    RETURNING id::int8 AS id, cpf::text AS cpf, mac_address::text AS mac_address, horario::timestamptz AS horario";
const PAGE_SQL: &str = "SELECT id::int8 AS id, cpf::text AS cpf, mac_address::text AS mac_address, \
    horario::timestamptz AS horario FROM logs ORDER BY horario DESC LIMIT $1 OFFSET $2";
const COUNT_SQL: &str = "SELECT COUNT(*) FROM logs";
const TOTALS_SQL: &str = r#"SELECT
    COUNT(*) AS total_logs,
    COUNT(DISTINCT cpf) AS cpfs_unicos,
    COUNT(DISTINCT mac_address) AS macs_unicos,
    MIN(horario)::timestamptz AS primeiro_registro,
    MAX(horario)::timestamptz AS ultimo_registro
FROM logs"#;
const LAST_24H_SQL: &str = "SELECT COUNT(*) FROM logs WHERE horario >= NOW() - INTERVAL '24 hours'";

#[derive(Clone)]
pub struct PgLogStore {
    pool: PgPool,
}

impl PgLogStore {
    /// Build the pool without opening a connection; the first query connects.
    pub fn connect_lazy(cfg: &DbConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .username(&cfg.user)
            .password(&cfg.password)
            .database(&cfg.name);
        let pool = PgPoolOptions::new()
            .max_connections(cfg.pool_max)
            .idle_timeout(cfg.idle_timeout)
            .acquire_timeout(cfg.connect_timeout)
            .connect_lazy_with(options);
        Self { pool }
    }

    /// Wrap an already connected pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `logs` table if it is absent.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl LogStore for PgLogStore {
    async fn insert_log(&self, cpf: &str, mac_upper: &str) -> Result<LogRecord, StoreError> {
        let row = sqlx::query_as::<_, LogRecord>(INSERT_SQL)
            .bind(cpf)
            .bind(mac_upper)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_logs(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<LogRecord>, i64), StoreError> {
        let rows = sqlx::query_as::<_, LogRecord>(PAGE_SQL)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        let total: i64 = sqlx::query_scalar(COUNT_SQL).fetch_one(&self.pool).await?;
        Ok((rows, total))
    }

    async fn compute_stats(&self) -> Result<LogStats, StoreError> {
        let totals = sqlx::query_as::<_, LogTotals>(TOTALS_SQL)
            .fetch_one(&self.pool)
            .await?;
        let logs_ultimas_24h: i64 = sqlx::query_scalar(LAST_24H_SQL)
            .fetch_one(&self.pool)
            .await?;
        Ok(LogStats {
            totals,
            logs_ultimas_24h,
        })
    }

    async fn search_logs(&self, query: &SearchQuery) -> Result<Vec<LogRecord>, StoreError> {
        let mut q = sqlx::query_as::<_, LogRecord>(query.sql());
        for param in query.params() {
            q = q.bind(param.as_str());
        }
        Ok(q.fetch_all(&self.pool).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
