//! Rendering tests for the Markdown report.

use nba_report::engine::{classify_style, style, ComparisonResult, UnavailableReason};
use nba_report::nba::types::SeasonAverages;
use nba_report::report::{render_markdown, PlayerReport};
use nba_report::Season;
use std::str::FromStr;

fn averages() -> SeasonAverages {
    SeasonAverages {
        games_played: 74,
        pts: 27.0,
        reb: 8.1,
        ast: 4.9,
        stl: 1.0,
        blk: 0.6,
        fg_pct: 0.471,
        ft_pct: 0.833,
    }
}

fn base_report() -> PlayerReport {
    PlayerReport {
        name: "Jayson Tatum".to_string(),
        team: "BOS".to_string(),
        status: "Active".to_string(),
        position: "Forward".to_string(),
        season: Season::from_str("2023-24").unwrap(),
        averages: Some(averages()),
        style: classify_style(27.0, 4.9, 8.1),
        comparison: Some(ComparisonResult::Match {
            name: "Kevin Durant".to_string(),
            similarity_pct: 93.27,
        }),
        awards: vec!["All-NBA".to_string(), "NBA All-Star".to_string()],
    }
}

#[test]
fn full_report_renders_every_section() {
    let md = render_markdown(&base_report());

    assert!(md.contains("## Jayson Tatum (BOS)"));
    assert!(md.contains("**Status:** Active"));
    assert!(md.contains("**Position:** Forward"));
    assert!(md.contains("**2023-24 Season Averages:**"));
    assert!(md.contains("* Points: **27.0**"));
    assert!(md.contains("* Rebounds: **8.1**"));
    // Percentages scale from fractions to the display range.
    assert!(md.contains("* FG%: **47.1**"));
    assert!(md.contains("* FT%: **83.3**"));
    assert!(md.contains("**Core style:** Volume Scorer"));
    assert!(md.contains("* **Closest match:** Kevin Durant (similarity 93.27%)"));
    assert!(md.contains("* All-NBA"));
    assert!(md.contains("* NBA All-Star"));
}

#[test]
fn fallback_report_annotates_reason_and_label() {
    let mut report = base_report();
    report.comparison = Some(ComparisonResult::Unavailable {
        reason: UnavailableReason::EmptyAfterFilter,
    });

    let md = render_markdown(&report);
    assert!(md.contains("* **Closest match:** none (population empty after filtering)"));
    assert!(md.contains("* **Style fallback:** Volume Scorer"));
}

#[test]
fn no_data_season_renders_explicit_markers() {
    let mut report = base_report();
    report.averages = None;
    report.style = style::insufficient_data();
    report.comparison = None;
    report.awards = Vec::new();

    let md = render_markdown(&report);
    assert!(md.contains("* No games played in the 2023-24 season."));
    assert!(md.contains("**Core style:** Insufficient Data"));
    assert!(md.contains("* **Closest match:** not available without season data"));
    assert!(md.contains("* No official NBA awards on record"));
    assert!(!md.contains("* Points:"));
}

#[test]
fn free_agent_rendering() {
    let mut report = base_report();
    report.team = String::new();

    let md = render_markdown(&report);
    assert!(md.contains("## Jayson Tatum (Free Agent)"));
}

#[test]
fn report_serializes_to_json() {
    let value = serde_json::to_value(base_report()).unwrap();

    assert_eq!(value["name"], "Jayson Tatum");
    assert_eq!(value["season"], "2023-24");
    assert_eq!(value["style"]["label"], "volume_scorer");
    assert_eq!(value["comparison"]["outcome"], "match");
    assert_eq!(value["comparison"]["name"], "Kevin Durant");
    assert_eq!(value["averages"]["games_played"], 74);
}
