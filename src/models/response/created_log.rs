//! Body of a successful `POST /logs`.

use crate::models::log::log_record::LogRecord;
use serde::{Deserialize, Serialize};

pub const CREATED_MESSAGE: &str = "Log registrado com sucesso";

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedLog {
    pub message: String,
    pub data: LogRecord,
}

impl From<LogRecord> for CreatedLog {
    fn from(data: LogRecord) -> Self {
        CreatedLog {
            message: CREATED_MESSAGE.to_string(),
            data,
        }
    }
}
