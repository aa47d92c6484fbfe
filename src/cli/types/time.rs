//! Season identifiers for the NBA stats API.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA season identifiers.
///
/// The stats API addresses a season by the `YYYY-YY` label spanning the two
/// calendar years it covers, e.g. `2023-24`. Parsing validates that the
/// two-digit suffix is the start year plus one.
///
/// # Examples
///
/// ```rust
/// use nba_report::Season;
/// use std::str::FromStr;
///
/// let season = Season::from_str("2023-24").unwrap();
/// assert_eq!(season.as_str(), "2023-24");
/// assert!(Season::from_str("2023-25").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First calendar year of the season, e.g. 2023 for `2023-24`.
    pub fn start_year(&self) -> u16 {
        // Validated at construction, so the prefix always parses.
        self.0[..4].parse().unwrap_or_default()
    }
}

impl Default for Season {
    fn default() -> Self {
        Self("2024-25".to_string())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            season: s.to_string(),
        };

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(invalid());
        }
        let start_year: u16 = start.parse().map_err(|_| invalid())?;
        let end_year: u8 = end.parse().map_err(|_| invalid())?;
        if (start_year + 1) % 100 != end_year as u16 {
            return Err(invalid());
        }

        Ok(Self(s.to_string()))
    }
}
