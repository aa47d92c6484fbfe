//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_report::{
    cli::{Commands, NbaReport},
    commands::{handle_compare, handle_report, CompareParams, ReportParams},
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaReport::parse();

    match app.command {
        Commands::Report { query, json } => {
            handle_report(ReportParams {
                player: query.player,
                season: query.season,
                position: query.position,
                same_position: query.same_position,
                as_json: json,
            })
            .await?
        }

        Commands::Compare { query, json } => {
            handle_compare(CompareParams {
                player: query.player,
                season: query.season,
                position: query.position,
                same_position: query.same_position,
                as_json: json,
            })
            .await?
        }
    }

    Ok(())
}
