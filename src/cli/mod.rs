//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Team, WeekScope};

use crate::odds::{NFL_SPORT_KEY, ODDS_BASE_URL};

/// Matchup arguments shared between commands
#[derive(Debug, Args)]
pub struct MatchupArgs {
    /// Home team abbreviation (e.g. SEA).
    #[clap(long, default_value_t = Team::SEA)]
    pub home: Team,

    /// Away team abbreviation (e.g. NE).
    #[clap(long, default_value_t = Team::NE)]
    pub away: Team,

    /// Directory holding rosters_weekly.csv, player_stats.csv and team_stats.csv
    /// (or set `NFL_EDGE_DATA_DIR`).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// How the latest roster week is chosen.
    #[clap(long, value_enum, default_value_t = WeekScope::Global)]
    pub week_scope: WeekScope,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rate both offenses and print the model edge (no network access).
    Ratings {
        #[clap(flatten)]
        matchup: MatchupArgs,
    },

    /// Rate both offenses and compare against the sportsbook moneyline.
    ///
    /// Fetches head-to-head odds for the home team's game and converts each
    /// price to an implied probability.
    Compare {
        #[clap(flatten)]
        matchup: MatchupArgs,

        /// Odds API key (or set `ODDS_API_KEY` env var).
        #[clap(long)]
        api_key: Option<String>,

        /// Odds provider base URL.
        #[clap(long, default_value = ODDS_BASE_URL)]
        odds_url: String,

        /// Odds provider sport key.
        #[clap(long, default_value = NFL_SPORT_KEY)]
        sport: String,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nfl-edge", about = "NFL matchup ratings versus the moneyline")]
pub struct Cli {
    /// Show per-player breakdowns and info-level logs.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
