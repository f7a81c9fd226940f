//! Paged listing body and the page arithmetic behind it.

use crate::models::log::log_record::LogRecord;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// `total_pages` is `ceil(total / limit)`, so an empty table has zero pages.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if limit > 0 && total > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Pagination {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogPage {
    pub data: Vec<LogRecord>,
    pub pagination: Pagination,
}

/// Row offset for a 1-based page.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}
