//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use nfl_edge::{
    cli::{Cli, Commands, MatchupArgs},
    commands::{
        compare::{handle_compare, OddsParams},
        ratings::handle_ratings,
        report::MatchupParams,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn matchup_params(matchup: MatchupArgs, verbose: bool) -> MatchupParams {
    MatchupParams {
        home: matchup.home,
        away: matchup.away,
        data_dir: matchup.data_dir,
        week_scope: matchup.week_scope,
        as_json: matchup.json,
        verbose,
    }
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Cli::parse();
    init_tracing(app.verbose);

    match app.command {
        Commands::Ratings { matchup } => handle_ratings(matchup_params(matchup, app.verbose))?,

        Commands::Compare {
            matchup,
            api_key,
            odds_url,
            sport,
        } => {
            handle_compare(
                matchup_params(matchup, app.verbose),
                OddsParams {
                    api_key,
                    odds_url,
                    sport,
                },
            )
            .await?
        }
    }

    Ok(())
}
