//! NBA Player Report CLI Library
//!
//! A Rust library for generating single-player season reports from the
//! public NBA stats API: per-game averages, a rule-based play-style label,
//! and a nearest-neighbor comparable-player lookup.
//!
//! ## Features
//!
//! - **Player Data Retrieval**: Fetch bios, season averages, and award
//!   history from the stats API
//! - **Comparable-Player Engine**: Standardized cosine-similarity nearest
//!   neighbor over the league-wide per-game table, with position-group and
//!   production-floor filtering
//! - **Style Classification**: Fixed-threshold play-style labels with a
//!   distinct insufficient-data outcome
//! - **Markdown Reports**: Clean Markdown (or JSON) output with explicit
//!   markers for every degraded field
//! - **Session Caching**: TTL-bounded in-memory caching of the league table
//!
//! ## Quick Start
//!
//! ```rust
//! use nba_report::{find_closest_match, ComparisonResult, PlayerId, PlayerRecord, StatProfile};
//!
//! let profile = StatProfile {
//!     pts: 27.0, reb: 8.1, ast: 4.9, stl: 1.0, blk: 0.6,
//!     fg_pct: 0.471, ft_pct: 0.833,
//! };
//! let target = PlayerRecord {
//!     id: PlayerId::new(1628369),
//!     name: "Jayson Tatum".to_string(),
//!     position: "F".to_string(),
//!     profile,
//! };
//!
//! // A population the provider could not supply degrades, never panics.
//! let result = find_closest_match(&target, None, None);
//! assert!(matches!(result, ComparisonResult::Unavailable { .. }));
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod nba;
pub mod report;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, Season};
pub use engine::{
    classify_style, find_closest_match, ComparisonResult, PlayerRecord, StatProfile,
    StyleAssessment, StyleLabel, UnavailableReason,
};
pub use error::{NbaError, Result};
