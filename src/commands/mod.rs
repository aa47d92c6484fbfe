//! Command implementations for the NBA report CLI.

pub mod common;
pub mod compare;
pub mod report;

pub use compare::{handle_compare, CompareParams};
pub use report::{handle_report, ReportParams};
