//! Aggregate figures over the whole log table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row returned by the single aggregate query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LogTotals {
    pub total_logs: i64,
    pub cpfs_unicos: i64,
    pub macs_unicos: i64,
    /// `None` on an empty table.
    pub primeiro_registro: Option<DateTime<Utc>>,
    pub ultimo_registro: Option<DateTime<Utc>>,
}

/// Serialized flat: the totals fields followed by `logs_ultimas_24h`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStats {
    #[serde(flatten)]
    pub totals: LogTotals,
    pub logs_ultimas_24h: i64,
}
