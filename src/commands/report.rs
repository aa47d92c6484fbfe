//! Full player season report.
//!
//! Fetches the target's bio, per-game averages, and award history, then the
//! league-wide reference population, and renders the combined report. Every
//! upstream gap short of an unknown player degrades a section instead of
//! failing the report: a season with no games drops the averages and the
//! comparison, and a missing population downgrades the comparison to the
//! rule-based style fallback.

use crate::cli::types::{Position, Season};
use crate::core::cache::CachePolicy;
use crate::engine::style::insufficient_data;
use crate::engine::{classify_style, find_closest_match};
use crate::nba::StatsProvider;
use crate::report::{render_markdown, PlayerReport};
use crate::Result;

use super::common::{fetch_population, resolve_position_filter, target_record};

/// Configuration for one report query.
#[derive(Debug)]
pub struct ReportParams {
    pub player: String,
    pub season: Season,
    pub position: Option<Position>,
    pub same_position: bool,
    pub as_json: bool,
}

pub async fn handle_report(params: ReportParams) -> Result<()> {
    let provider = StatsProvider::new(CachePolicy::default())?;

    eprintln!("Fetching {} stats for {}...", params.season, params.player);
    let player = provider
        .fetch_player_season_stats(&params.player, &params.season)
        .await?;

    let population = fetch_population(&provider, &params.season).await;
    let filter = resolve_position_filter(
        params.position,
        params.same_position,
        &player.bio.position,
    );

    let style = match &player.averages {
        Some(avg) => classify_style(avg.pts, avg.ast, avg.reb),
        None => insufficient_data(),
    };

    let comparison = target_record(&player)
        .map(|target| find_closest_match(&target, population.as_deref(), filter.as_deref()));

    let report = PlayerReport {
        name: player.bio.name,
        team: player.bio.team,
        status: player.bio.status,
        position: player.bio.position,
        season: params.season,
        averages: player.averages,
        style,
        comparison,
        awards: player.awards,
    };

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_markdown(&report));
    }

    Ok(())
}
