//! Comparable-player lookup without the rest of the report.

use serde_json::json;

use crate::cli::types::{Position, Season};
use crate::core::cache::CachePolicy;
use crate::engine::{classify_style, find_closest_match, ComparisonResult};
use crate::nba::StatsProvider;
use crate::Result;

use super::common::{fetch_population, resolve_position_filter, target_record};

/// Configuration for one comparison query.
#[derive(Debug)]
pub struct CompareParams {
    pub player: String,
    pub season: Season,
    pub position: Option<Position>,
    pub same_position: bool,
    pub as_json: bool,
}

pub async fn handle_compare(params: CompareParams) -> Result<()> {
    let provider = StatsProvider::new(CachePolicy::default())?;

    let player = provider
        .fetch_player_season_stats(&params.player, &params.season)
        .await?;

    let Some(target) = target_record(&player) else {
        if params.as_json {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "player": player.bio.name,
                    "season": params.season,
                    "result": null,
                }))?
            );
        } else {
            println!(
                "No {} season data for {}; comparison unavailable.",
                params.season, player.bio.name
            );
        }
        return Ok(());
    };

    let population = fetch_population(&provider, &params.season).await;
    let filter = resolve_position_filter(
        params.position,
        params.same_position,
        &player.bio.position,
    );
    let result = find_closest_match(&target, population.as_deref(), filter.as_deref());

    if params.as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "player": player.bio.name,
                "season": params.season,
                "result": result,
            }))?
        );
        return Ok(());
    }

    match result {
        ComparisonResult::Match {
            name,
            similarity_pct,
        } => {
            println!(
                "{} ~ {} (similarity {:.2}%)",
                player.bio.name, name, similarity_pct
            );
        }
        ComparisonResult::Unavailable { reason } => {
            let profile = target.profile;
            let fallback = classify_style(profile.pts, profile.ast, profile.reb);
            println!(
                "No comparable player ({}); style fallback: {}",
                reason, fallback.label
            );
        }
    }

    Ok(())
}
