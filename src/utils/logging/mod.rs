//! Logging helpers for table loading

pub mod log;

pub use self::log::{log_load_complete, log_load_start, log_short_table, log_table_loaded};
