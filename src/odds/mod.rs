//! Sportsbook odds: provider client, response types and probability conversion

pub mod convert;
pub mod http;
pub mod types;

pub use convert::{american_to_prob, moneyline_lines, no_vig, overround, GameLine, ImpliedOutcome};
pub use http::{OddsClient, NFL_SPORT_KEY, ODDS_BASE_URL};
pub use types::{Bookmaker, Market, OddsEvent, Outcome};
