//! `/logs/search` body.

use crate::models::log::log_record::LogRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub data: Vec<LogRecord>,
    pub count: usize,
}

impl From<Vec<LogRecord>> for SearchResult {
    fn from(data: Vec<LogRecord>) -> Self {
        let count = data.len();
        SearchResult { data, count }
    }
}
