pub mod log_record;
pub mod log_stats;
