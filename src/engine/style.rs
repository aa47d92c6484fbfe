//! Rule-based play-style classification.
//!
//! A fixed threshold table over three per-game scalars, evaluated in priority
//! order with the first match winning. Used both as a standalone report field
//! and as the fallback when the comparison engine cannot produce a match.

use serde::Serialize;
use std::fmt;

const HIGH_PTS: f64 = 25.0;
const HIGH_AST: f64 = 8.0;
const HIGH_REB: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleLabel {
    EliteAllAround,
    VolumeScorer,
    PlaymakingMaestro,
    ReboundingAnchor,
    RolePlayer,
    InsufficientData,
}

impl StyleLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleLabel::EliteAllAround => "Elite All-Around Star",
            StyleLabel::VolumeScorer => "Volume Scorer",
            StyleLabel::PlaymakingMaestro => "Playmaking Maestro",
            StyleLabel::ReboundingAnchor => "Rebounding/Defense Anchor",
            StyleLabel::RolePlayer => "Role Player",
            StyleLabel::InsufficientData => "Insufficient Data",
        }
    }
}

impl fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A style label with its one-line rating and an era comparison blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleAssessment {
    pub label: StyleLabel,
    pub rating: &'static str,
    pub era_comparison: &'static str,
}

/// Classify a player's style from per-game points, assists and rebounds.
///
/// Total over all finite inputs; negative and zero averages fall through to
/// the role-player bucket. Non-finite input means the averages were never
/// produced (no games in the season) and short-circuits to the distinct
/// insufficient-data label before any threshold is evaluated.
pub fn classify_style(pts: f64, ast: f64, reb: f64) -> StyleAssessment {
    if !pts.is_finite() || !ast.is_finite() || !reb.is_finite() {
        return insufficient_data();
    }

    if pts >= HIGH_PTS && ast >= 6.0 && reb >= 6.0 {
        StyleAssessment {
            label: StyleLabel::EliteAllAround,
            rating: "A generational player combining scoring, playmaking and rebounding.",
            era_comparison: "Similar in style to prime LeBron James or Nikola Jokic.",
        }
    } else if pts >= HIGH_PTS {
        StyleAssessment {
            label: StyleLabel::VolumeScorer,
            rating: "A top-tier scorer who can get a bucket from anywhere on the floor.",
            era_comparison: "Similar in style to prime Kevin Durant or Michael Jordan.",
        }
    } else if ast >= HIGH_AST && pts >= 15.0 {
        StyleAssessment {
            label: StyleLabel::PlaymakingMaestro,
            rating: "A pass-first floor general with reliable scoring of his own.",
            era_comparison: "Similar in style to prime Steve Nash or Chris Paul.",
        }
    } else if reb >= HIGH_REB && pts < 15.0 {
        StyleAssessment {
            label: StyleLabel::ReboundingAnchor,
            rating: "An interior specialist who anchors the defense and the glass.",
            era_comparison: "Similar in style to prime Dennis Rodman or Ben Wallace.",
        }
    } else {
        StyleAssessment {
            label: StyleLabel::RolePlayer,
            rating: "A dependable rotation contributor.",
            era_comparison: "No direct stylistic comparison.",
        }
    }
}

/// The label used when a season produced no per-game averages at all.
pub fn insufficient_data() -> StyleAssessment {
    StyleAssessment {
        label: StyleLabel::InsufficientData,
        rating: "Try a season in which the player logged games.",
        era_comparison: "No stylistic comparison available.",
    }
}
