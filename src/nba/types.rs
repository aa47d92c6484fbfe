//! Serde types for the stats API response envelope.
//!
//! Every stats.nba.com endpoint answers with the same shape: a resource
//! name, the echoed parameters, and a list of tabular result sets, each a
//! header row plus untyped value rows. Column positions differ by endpoint
//! and occasionally by season, so rows are addressed through a header lookup
//! instead of fixed indices.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::types::PlayerId;
use crate::engine::StatProfile;

/// One named table inside a stats API response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Position of a header, matched case-insensitively.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(header))
    }
}

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsEnvelope {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(rename = "resultSets", default)]
    pub result_sets: Vec<ResultSet>,
}

impl StatsEnvelope {
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name.eq_ignore_ascii_case(name))
    }
}

/// Identity and roster facts for one player, from `commonplayerinfo`.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerBio {
    pub id: PlayerId,
    pub name: String,
    /// Team abbreviation, e.g. "BOS"; empty for unsigned players.
    pub team: String,
    /// Position label as reported, e.g. "Forward" or "Guard-Forward".
    pub position: String,
    /// Roster status, e.g. "Active".
    pub status: String,
}

/// One season's per-game averages, derived from season totals.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonAverages {
    pub games_played: u32,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    /// Field-goal percentage as a fraction in [0, 1].
    pub fg_pct: f64,
    /// Free-throw percentage as a fraction in [0, 1].
    pub ft_pct: f64,
}

impl SeasonAverages {
    /// The seven-feature profile consumed by the comparison engine.
    pub fn profile(&self) -> StatProfile {
        StatProfile {
            pts: self.pts,
            reb: self.reb,
            ast: self.ast,
            stl: self.stl,
            blk: self.blk,
            fg_pct: self.fg_pct,
            ft_pct: self.ft_pct,
        }
    }
}

/// Everything the provider knows about one player-season.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSeason {
    pub bio: PlayerBio,
    /// `None` when the player logged no games in the requested season.
    pub averages: Option<SeasonAverages>,
    pub awards: Vec<String>,
}
