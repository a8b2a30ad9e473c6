//! NFL Matchup Edge Library
//!
//! Rates the offenses of two opposing NFL teams from season and recent-form
//! statistics and sets the difference against a sportsbook's moneyline.
//!
//! ## Features
//!
//! - **Roster Resolution**: Active QB/RB/WR/TE for a team at the latest week
//! - **Position Scoring**: Fixed-weight scores with volume floors per position
//! - **Matchup Adjustments**: Opponent defensive EPA and team pace multipliers
//! - **Team Ratings**: Weighted aggregate with a per-player breakdown
//! - **Odds Comparison**: American odds to implied and no-vig probabilities
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_edge::{data::loader::load_from_dir, engine::build_team_model};
//! use std::path::Path;
//!
//! # fn example() -> nfl_edge::Result<()> {
//! let repo = load_from_dir(Path::new("data"))?;
//! let home = build_team_model(&repo, "SEA", "NE");
//! let away = build_team_model(&repo, "NE", "SEA");
//! println!("edge: {:.2}", home - away);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ODDS_API_KEY=your-key
//! export NFL_EDGE_DATA_DIR=/path/to/csv/exports
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod odds;

// Re-export commonly used types
pub use cli::types::{Position, Team, Week, WeekScope};
pub use error::{NflError, Result};

pub const ODDS_API_KEY_ENV_VAR: &str = "ODDS_API_KEY";
pub const DATA_DIR_ENV_VAR: &str = "NFL_EDGE_DATA_DIR";
