pub mod created_log;
pub mod error_body;
pub mod health_status;
pub mod log_page;
pub mod search_result;
