//! High-level stats provider: the boundary the rest of the crate talks to.
//!
//! Composes the raw endpoint calls into the two operations the report needs:
//! one player-season's stats and the league-wide reference population. The
//! player index and the reference population are cached per season behind a
//! TTL, with the expiry policy supplied at construction.

use reqwest::Client;
use std::time::Duration;

use crate::cli::types::{PlayerId, Season};
use crate::core::cache::{CachePolicy, TtlCache};
use crate::engine::PlayerRecord;
use crate::nba::compute::{award_list, build_population, find_person, player_bio, season_averages};
use crate::nba::http;
use crate::nba::types::{PlayerSeason, ResultSet, StatsEnvelope};
use crate::{NbaError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct StatsProvider {
    client: Client,
    index_cache: TtlCache<Season, ResultSet>,
    population_cache: TtlCache<Season, Vec<PlayerRecord>>,
}

impl StatsProvider {
    /// Build a provider with the given cache policy. The policy applies to
    /// both season-keyed caches (player index and reference population).
    pub fn new(cache_policy: CachePolicy) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            index_cache: TtlCache::new(cache_policy),
            population_cache: TtlCache::new(cache_policy),
        })
    }

    /// Deserialize an endpoint payload and pull one named table out of it.
    fn extract(payload: serde_json::Value, name: &str) -> Result<ResultSet> {
        let envelope: StatsEnvelope = serde_json::from_value(payload)?;
        envelope.result_set(name).cloned().ok_or(NbaError::NoData)
    }

    async fn player_index(&self, season: &Season) -> Result<ResultSet> {
        if let Some(index) = self.index_cache.get(season) {
            return Ok(index);
        }
        let payload = http::get_player_index(&self.client, season).await?;
        let index = Self::extract(payload, "PlayerIndex")?;
        self.index_cache.put(season.clone(), index.clone());
        Ok(index)
    }

    /// Resolve a player name to a person ID via the season's player index.
    pub async fn find_player_id(&self, name: &str, season: &Season) -> Result<PlayerId> {
        let index = self.player_index(season).await?;
        find_person(&index, name)
            .map(|(id, _)| id)
            .ok_or_else(|| NbaError::PlayerNotFound {
                name: name.to_string(),
            })
    }

    /// Fetch one player's bio, per-game season averages, and award history.
    ///
    /// A season with no games yields `averages: None` rather than an error.
    /// A failed award fetch degrades to an empty list; awards are decoration,
    /// not report-critical data.
    pub async fn fetch_player_season_stats(
        &self,
        name: &str,
        season: &Season,
    ) -> Result<PlayerSeason> {
        let player_id = self.find_player_id(name, season).await?;

        let info = http::get_player_info(&self.client, player_id).await?;
        let bio = player_bio(&Self::extract(info, "CommonPlayerInfo")?).ok_or(NbaError::NoData)?;

        let career = http::get_career_stats(&self.client, player_id).await?;
        let averages = season_averages(
            &Self::extract(career, "SeasonTotalsRegularSeason")?,
            season,
        );

        let awards = match http::get_player_awards(&self.client, player_id).await {
            Ok(payload) => Self::extract(payload, "PlayerAwards")
                .map(|rs| award_list(&rs))
                .unwrap_or_default(),
            Err(err) => {
                eprintln!("warning: award history unavailable: {err}");
                Vec::new()
            }
        };

        Ok(PlayerSeason {
            bio,
            averages,
            awards,
        })
    }

    /// Fetch the league-wide per-game reference population for a season,
    /// positions joined in from the player index. Cached per season.
    pub async fn fetch_league_season_stats(&self, season: &Season) -> Result<Vec<PlayerRecord>> {
        if let Some(population) = self.population_cache.get(season) {
            return Ok(population);
        }

        let league = http::get_league_player_stats(&self.client, season).await?;
        let league = Self::extract(league, "LeagueDashPlayerStats")?;
        let index = self.player_index(season).await?;

        let population = build_population(&league, &index);
        if population.is_empty() {
            return Err(NbaError::NoData);
        }

        self.population_cache
            .put(season.clone(), population.clone());
        Ok(population)
    }
}
