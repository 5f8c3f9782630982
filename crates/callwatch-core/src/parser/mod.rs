//! HTML parsing for ISED results pages

pub mod results_table;

pub use results_table::{TableScan, scan_results_table};
