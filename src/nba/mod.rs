//! Stats API boundary: HTTP calls, response envelope types, row extraction,
//! and the cached provider facade.

pub mod compute;
pub mod http;
pub mod provider;
pub mod types;

pub use provider::StatsProvider;
pub use types::{PlayerBio, PlayerSeason, SeasonAverages};
