//! Raw HTTP calls to the stats API.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use serde_json::Value;

use crate::cli::types::{PlayerId, Season};
use crate::Result;

/// Base path for the public NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Request headers without which stats.nba.com rejects or stalls requests.
pub fn stats_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        ),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    headers
}

async fn get_json(client: &Client, url: &str, params: &[(&str, &str)]) -> Result<Value> {
    let res = client
        .get(url)
        .headers(stats_headers())
        .query(params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

/// League-wide player index for a season (`playerindex`): identity, team,
/// and position labels.
pub async fn get_player_index(client: &Client, season: &Season) -> Result<Value> {
    let url = format!("{STATS_BASE_URL}/playerindex");
    let params = [
        ("LeagueID", "00"),
        ("Season", season.as_str()),
        ("Historical", "1"),
    ];
    get_json(client, &url, &params).await
}

/// Bio and roster facts for one player (`commonplayerinfo`).
pub async fn get_player_info(client: &Client, player_id: PlayerId) -> Result<Value> {
    let url = format!("{STATS_BASE_URL}/commonplayerinfo");
    let id = player_id.to_string();
    let params = [("PlayerID", id.as_str()), ("LeagueID", "00")];
    get_json(client, &url, &params).await
}

/// Career season totals for one player (`playercareerstats`).
pub async fn get_career_stats(client: &Client, player_id: PlayerId) -> Result<Value> {
    let url = format!("{STATS_BASE_URL}/playercareerstats");
    let id = player_id.to_string();
    let params = [
        ("PlayerID", id.as_str()),
        ("LeagueID", "00"),
        ("PerMode", "Totals"),
    ];
    get_json(client, &url, &params).await
}

/// Official award history for one player (`playerawards`).
pub async fn get_player_awards(client: &Client, player_id: PlayerId) -> Result<Value> {
    let url = format!("{STATS_BASE_URL}/playerawards");
    let id = player_id.to_string();
    let params = [("PlayerID", id.as_str())];
    get_json(client, &url, &params).await
}

/// Full-league per-game stat table for a season (`leaguedashplayerstats`).
///
/// The endpoint requires its full parameter set even when most values are
/// empty; omitting them is a 400.
pub async fn get_league_player_stats(client: &Client, season: &Season) -> Result<Value> {
    let url = format!("{STATS_BASE_URL}/leaguedashplayerstats");
    let params = [
        ("LeagueID", "00"),
        ("Season", season.as_str()),
        ("SeasonType", "Regular Season"),
        ("PerMode", "PerGame"),
        ("MeasureType", "Base"),
        ("PlusMinus", "N"),
        ("PaceAdjust", "N"),
        ("Rank", "N"),
        ("Outcome", ""),
        ("Location", ""),
        ("Month", "0"),
        ("SeasonSegment", ""),
        ("DateFrom", ""),
        ("DateTo", ""),
        ("OpponentTeamID", "0"),
        ("VsConference", ""),
        ("VsDivision", ""),
        ("GameSegment", ""),
        ("Period", "0"),
        ("LastNGames", "0"),
    ];
    get_json(client, &url, &params).await
}
