//! One CPF / MAC association row as stored and served.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LogRecord {
    pub id: i64,
    /// Kept exactly as submitted, punctuation included.
    pub cpf: String,
    /// Always uppercase.
    pub mac_address: String,
    pub horario: DateTime<Utc>,
}
