//! Core utilities for the NBA report CLI.

pub mod cache;

pub use cache::{CachePolicy, TtlCache};
