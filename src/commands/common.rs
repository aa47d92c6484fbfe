//! Shared helpers for command handlers.

use crate::cli::types::{Position, Season};
use crate::engine::PlayerRecord;
use crate::nba::types::PlayerSeason;
use crate::nba::StatsProvider;

/// Resolve the position-group filter for the comparison pool.
///
/// An explicit `-p` group wins; `--same-position` derives the group from the
/// target's own position label. A target label that maps to no known group
/// leaves the pool unfiltered.
pub fn resolve_position_filter(
    explicit: Option<Position>,
    same_position: bool,
    target_position_label: &str,
) -> Option<String> {
    if let Some(position) = explicit {
        return Some(position.group_letter().to_string());
    }
    if same_position {
        return Position::from_label(target_position_label).map(|p| p.group_letter().to_string());
    }
    None
}

/// Fetch the reference population, degrading to `None` with a warning when
/// the league table cannot be produced. The report must survive a missing
/// population, so the error stops here.
pub async fn fetch_population(
    provider: &StatsProvider,
    season: &Season,
) -> Option<Vec<PlayerRecord>> {
    match provider.fetch_league_season_stats(season).await {
        Ok(population) => Some(population),
        Err(err) => {
            eprintln!("warning: league stats unavailable: {err}");
            None
        }
    }
}

/// Build the engine's target record from a fetched player-season, if the
/// season produced any averages to compare.
pub fn target_record(player: &PlayerSeason) -> Option<PlayerRecord> {
    player.averages.as_ref().map(|avg| PlayerRecord {
        id: player.bio.id,
        name: player.bio.name.clone(),
        position: player.bio.position.clone(),
        profile: avg.profile(),
    })
}
