//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{Position, Season};

/// Arguments shared between commands that query one player-season.
#[derive(Debug, Args)]
pub struct PlayerQuery {
    /// Player full name, e.g. "Jayson Tatum".
    #[clap(long, short = 'n')]
    pub player: String,

    /// Season in the YYYY-YY form (e.g. 2023-24).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Restrict the comparison pool to one position group: `-p G`.
    #[clap(short = 'p', long = "position")]
    pub position: Option<Position>,

    /// Restrict the comparison pool to the target player's own position group.
    #[clap(long)]
    pub same_position: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-report", about = "NBA player season report CLI")]
pub struct NbaReport {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a full Markdown season report for one player.
    ///
    /// Fetches the player's per-game averages, classifies their play style,
    /// and looks up the most statistically similar peer in the league.
    Report {
        #[clap(flatten)]
        query: PlayerQuery,

        /// Output the report as JSON instead of Markdown.
        #[clap(long)]
        json: bool,
    },

    /// Find the most statistically similar qualifying peer for one player.
    Compare {
        #[clap(flatten)]
        query: PlayerQuery,

        /// Output the result as JSON instead of a text line.
        #[clap(long)]
        json: bool,
    },
}
