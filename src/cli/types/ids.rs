//! ID types for the NBA stats API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for NBA person IDs.
///
/// Ensures player IDs are handled consistently throughout the application
/// and provides type safety to prevent mixing them up with other numeric values.
///
/// # Examples
///
/// ```rust
/// use nba_report::PlayerId;
///
/// let player_id = PlayerId::new(1628369);
/// assert_eq!(player_id.as_u64(), 1628369);
/// assert_eq!(player_id.to_string(), "1628369");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
