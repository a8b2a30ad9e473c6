//! Team rating engine
//!
//! - `adjustments`: opponent-defense and pace multipliers
//! - `scoring`: per-player position scores
//! - `team`: weighted team aggregate

pub mod adjustments;
pub mod scoring;
pub mod team;

pub use adjustments::{get_def_adjustment, get_pace_adjustment};
pub use scoring::{qb_score, rb_score, rec_score, PlayerScore};
pub use team::{build_team_model, PlayerContribution, TeamBreakdown, TeamModelBuilder};
