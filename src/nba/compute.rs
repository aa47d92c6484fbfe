//! Pure extraction helpers over stats API result sets.
//!
//! Rows arrive as untyped JSON arrays addressed by header name. These
//! helpers pull typed records out of them; numeric cells that are missing or
//! null coerce to 0.0 so downstream profiles are always fully populated.

use serde_json::Value;
use std::collections::HashMap;

use crate::cli::types::{PlayerId, Season};
use crate::engine::{PlayerRecord, StatProfile};
use crate::nba::types::{PlayerBio, ResultSet, SeasonAverages};

fn f64_at(row: &[Value], col: Option<usize>) -> f64 {
    col.and_then(|i| row.get(i))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

fn u64_at(row: &[Value], col: Option<usize>) -> Option<u64> {
    col.and_then(|i| row.get(i)).and_then(Value::as_u64)
}

fn str_at<'a>(row: &'a [Value], col: Option<usize>) -> Option<&'a str> {
    col.and_then(|i| row.get(i)).and_then(Value::as_str)
}

/// Divide a season total by games played; 0.0 when no games were logged.
pub fn per_game(total: f64, games: f64) -> f64 {
    if games > 0.0 {
        total / games
    } else {
        0.0
    }
}

/// Case-insensitive full-name lookup in the `PlayerIndex` table.
///
/// Returns the person ID and the name as the index spells it, so later
/// requests and self-exclusion use the canonical form.
pub fn find_person(index: &ResultSet, name: &str) -> Option<(PlayerId, String)> {
    let id_col = index.column("PERSON_ID");
    let first_col = index.column("PLAYER_FIRST_NAME");
    let last_col = index.column("PLAYER_LAST_NAME");

    index.row_set.iter().find_map(|row| {
        let first = str_at(row, first_col)?;
        let last = str_at(row, last_col)?;
        let full = format!("{} {}", first, last);
        if full.eq_ignore_ascii_case(name.trim()) {
            let id = u64_at(row, id_col)?;
            Some((PlayerId::new(id), full))
        } else {
            None
        }
    })
}

/// First row of the `CommonPlayerInfo` table.
pub fn player_bio(info: &ResultSet) -> Option<PlayerBio> {
    let row = info.row_set.first()?;
    let id = u64_at(row, info.column("PERSON_ID"))?;
    let name = str_at(row, info.column("DISPLAY_FIRST_LAST"))?.to_string();

    Some(PlayerBio {
        id: PlayerId::new(id),
        name,
        team: str_at(row, info.column("TEAM_ABBREVIATION"))
            .unwrap_or_default()
            .to_string(),
        position: str_at(row, info.column("POSITION"))
            .unwrap_or_default()
            .to_string(),
        status: str_at(row, info.column("ROSTERSTATUS"))
            .unwrap_or("Active")
            .to_string(),
    })
}

/// Per-game averages for one season out of the `SeasonTotalsRegularSeason`
/// table of career totals.
///
/// A player traded mid-season has one row per team plus a combined "TOT"
/// row; the combined row comes last, so the last matching row is the full
/// season. Returns `None` when the season is absent or has zero games
/// played.
pub fn season_averages(totals: &ResultSet, season: &Season) -> Option<SeasonAverages> {
    let season_col = totals.column("SEASON_ID");
    let row = totals
        .row_set
        .iter()
        .filter(|row| str_at(row, season_col) == Some(season.as_str()))
        .next_back()?;

    let games = f64_at(row, totals.column("GP"));
    if games <= 0.0 {
        return None;
    }

    Some(SeasonAverages {
        games_played: games as u32,
        pts: per_game(f64_at(row, totals.column("PTS")), games),
        reb: per_game(f64_at(row, totals.column("REB")), games),
        ast: per_game(f64_at(row, totals.column("AST")), games),
        stl: per_game(f64_at(row, totals.column("STL")), games),
        blk: per_game(f64_at(row, totals.column("BLK")), games),
        // Shooting percentages are already season rates, not totals.
        fg_pct: f64_at(row, totals.column("FG_PCT")),
        ft_pct: f64_at(row, totals.column("FT_PCT")),
    })
}

/// Unique award descriptions from the `PlayerAwards` table, order preserved.
pub fn award_list(awards: &ResultSet) -> Vec<String> {
    let desc_col = awards.column("DESCRIPTION");
    let mut seen = Vec::new();
    for row in &awards.row_set {
        if let Some(desc) = str_at(row, desc_col) {
            if !desc.is_empty() && !seen.iter().any(|s| s == desc) {
                seen.push(desc.to_string());
            }
        }
    }
    seen
}

/// Build the league-wide comparison pool from the `LeagueDashPlayerStats`
/// per-game table, joining position labels in from the `PlayerIndex` table.
///
/// The league table carries no position column, so players missing from the
/// index keep an empty position label; they still compare normally when no
/// position filter is in play. Row order of the league table is preserved.
pub fn build_population(league: &ResultSet, index: &ResultSet) -> Vec<PlayerRecord> {
    let positions: HashMap<u64, &str> = {
        let id_col = index.column("PERSON_ID");
        let pos_col = index.column("POSITION");
        index
            .row_set
            .iter()
            .filter_map(|row| Some((u64_at(row, id_col)?, str_at(row, pos_col)?)))
            .collect()
    };

    let id_col = league.column("PLAYER_ID");
    let name_col = league.column("PLAYER_NAME");
    let pts_col = league.column("PTS");
    let reb_col = league.column("REB");
    let ast_col = league.column("AST");
    let stl_col = league.column("STL");
    let blk_col = league.column("BLK");
    let fg_col = league.column("FG_PCT");
    let ft_col = league.column("FT_PCT");

    league
        .row_set
        .iter()
        .filter_map(|row| {
            let id = u64_at(row, id_col)?;
            let name = str_at(row, name_col)?.to_string();
            Some(PlayerRecord {
                id: PlayerId::new(id),
                name,
                position: positions.get(&id).copied().unwrap_or_default().to_string(),
                profile: StatProfile {
                    pts: f64_at(row, pts_col),
                    reb: f64_at(row, reb_col),
                    ast: f64_at(row, ast_col),
                    stl: f64_at(row, stl_col),
                    blk: f64_at(row, blk_col),
                    fg_pct: f64_at(row, fg_col),
                    ft_pct: f64_at(row, ft_col),
                },
            })
        })
        .collect()
}
