//! Player comparison engine and style classifier.

pub mod compare;
pub mod style;

pub use compare::{
    find_closest_match, ComparisonResult, PlayerRecord, StatProfile, UnavailableReason,
    MIN_POINTS_PER_GAME,
};
pub use style::{classify_style, StyleAssessment, StyleLabel};
