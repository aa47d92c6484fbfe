//! Error types for the NBA report CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season: {season} (expected the YYYY-YY form, e.g. 2023-24)")]
    InvalidSeason { season: String },

    #[error("Stats API returned no data")]
    NoData,
}
