//! NBA position groups and utilities.

use crate::error::NbaError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Coarse NBA position groups.
///
/// The stats API labels positions inconsistently across endpoints: the player
/// index uses letter forms ("G", "F-C"), while player info uses words
/// ("Guard", "Forward-Center"). Both collapse onto these three groups, keyed
/// by the leading letter of the label.
///
/// # Examples
///
/// ```rust
/// use nba_report::Position;
///
/// let guard = Position::Guard;
/// assert_eq!(guard.group_letter(), 'G');
/// assert_eq!(guard.to_string(), "G");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    Guard,
    Forward,
    Center,
}

impl Position {
    /// Single-letter group tag used for pool filtering.
    pub fn group_letter(&self) -> char {
        match self {
            Position::Guard => 'G',
            Position::Forward => 'F',
            Position::Center => 'C',
        }
    }

    /// Derive the group from an API position label, e.g. "Forward-Center"
    /// or "G-F". Hybrid labels resolve to their leading position.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().chars().next()?.to_ascii_uppercase() {
            'G' => Some(Position::Guard),
            'F' => Some(Position::Forward),
            'C' => Some(Position::Center),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group_letter())
    }
}

impl FromStr for Position {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "G" | "GUARD" => Ok(Position::Guard),
            "F" | "FORWARD" => Ok(Position::Forward),
            "C" | "CENTER" => Ok(Position::Center),
            _ => Err(NbaError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
