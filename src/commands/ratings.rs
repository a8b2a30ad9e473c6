//! Ratings command: model ratings and edge, no network access

use super::{
    load_repository,
    report::{render_ratings, MatchupParams, MatchupReport},
};
use crate::Result;

/// Handle the ratings command
pub fn handle_ratings(params: MatchupParams) -> Result<()> {
    let repo = load_repository(params.data_dir)?;
    let report = MatchupReport::build(&repo, params.home, params.away, params.week_scope);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_ratings(&report, params.verbose));
    }

    Ok(())
}
