//! Report assembly and rendering.

pub mod markdown;

use serde::Serialize;

use crate::cli::types::Season;
use crate::engine::{ComparisonResult, StyleAssessment};
use crate::nba::types::SeasonAverages;

pub use markdown::render_markdown;

/// Everything the renderer needs for one player-season report.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub name: String,
    pub team: String,
    pub status: String,
    pub position: String,
    pub season: Season,
    /// `None` when the player logged no games in the season.
    pub averages: Option<SeasonAverages>,
    pub style: StyleAssessment,
    /// `None` when no comparison was attempted (no season data to compare).
    pub comparison: Option<ComparisonResult>,
    pub awards: Vec<String>,
}
