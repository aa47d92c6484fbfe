//! Markdown rendering of a player report.
//!
//! Output is plain GitHub-flavored Markdown so it can be piped to a pager,
//! a gist, or any chat surface that renders it. Every degraded field gets an
//! explicit marker; the report never silently drops a section.

use crate::engine::ComparisonResult;
use crate::report::PlayerReport;

fn pct(fraction: f64) -> String {
    format!("{:.1}", fraction * 100.0)
}

pub fn render_markdown(report: &PlayerReport) -> String {
    let mut out = String::new();

    let team = if report.team.is_empty() {
        "Free Agent".to_string()
    } else {
        report.team.clone()
    };
    out.push_str(&format!("## {} ({})\n\n", report.name, team));
    out.push_str(&format!("**Status:** {}\n\n", report.status));
    out.push_str(&format!("**Position:** {}\n\n", report.position));

    out.push_str(&format!("**{} Season Averages:**\n", report.season));
    match &report.averages {
        Some(avg) => {
            out.push_str(&format!("* Games played: **{}**\n", avg.games_played));
            out.push_str(&format!("* Points: **{:.1}**\n", avg.pts));
            out.push_str(&format!("* Rebounds: **{:.1}**\n", avg.reb));
            out.push_str(&format!("* Assists: **{:.1}**\n", avg.ast));
            out.push_str(&format!("* Steals: **{:.1}**\n", avg.stl));
            out.push_str(&format!("* Blocks: **{:.1}**\n", avg.blk));
            out.push_str(&format!("* FG%: **{}**\n", pct(avg.fg_pct)));
            out.push_str(&format!("* FT%: **{}**\n", pct(avg.ft_pct)));
        }
        None => {
            out.push_str(&format!(
                "* No games played in the {} season.\n",
                report.season
            ));
        }
    }
    out.push_str("\n---\n\n");

    out.push_str("**Play-Style Analysis:**\n");
    out.push_str(&format!("* **Core style:** {}\n", report.style.label));
    out.push_str(&format!("* **Rating:** {}\n", report.style.rating));
    out.push_str(&format!(
        "* **Era comparison:** {}\n",
        report.style.era_comparison
    ));
    out.push_str("\n---\n\n");

    out.push_str("**Comparable Player:**\n");
    match &report.comparison {
        Some(ComparisonResult::Match {
            name,
            similarity_pct,
        }) => {
            out.push_str(&format!(
                "* **Closest match:** {} (similarity {:.2}%)\n",
                name, similarity_pct
            ));
        }
        Some(ComparisonResult::Unavailable { reason }) => {
            out.push_str(&format!("* **Closest match:** none ({})\n", reason));
            out.push_str(&format!("* **Style fallback:** {}\n", report.style.label));
        }
        None => {
            out.push_str("* **Closest match:** not available without season data\n");
        }
    }
    out.push_str("\n---\n\n");

    out.push_str("**Career Awards:**\n");
    if report.awards.is_empty() {
        out.push_str("* No official NBA awards on record\n");
    } else {
        for award in &report.awards {
            out.push_str(&format!("* {}\n", award));
        }
    }

    out
}
