//! Compare command: model ratings alongside the sportsbook moneyline

use super::{
    load_repository,
    report::{render_lines, render_ratings, MatchupParams, MatchupReport},
    resolve_api_key,
};
use crate::{
    odds::{moneyline_lines, OddsClient},
    Result,
};

/// Where and how to fetch odds
#[derive(Debug, Clone)]
pub struct OddsParams {
    pub api_key: Option<String>,
    pub odds_url: String,
    pub sport: String,
}

/// Handle the compare command
///
/// Ratings are computed before any network access so a failing odds request
/// never hides a data problem.
pub async fn handle_compare(params: MatchupParams, odds: OddsParams) -> Result<()> {
    let api_key = resolve_api_key(odds.api_key)?;
    let repo = load_repository(params.data_dir)?;
    let report = MatchupReport::build(&repo, params.home, params.away, params.week_scope);

    if !params.as_json {
        print!("{}", render_ratings(&report, params.verbose));
    }

    // tarpaulin::skip - HTTP call, tested via the odds client tests
    let client = OddsClient::new(odds.odds_url, api_key)?;
    let events = client.fetch_h2h_odds(&odds.sport).await?;

    let team_name = params.home.full_name();
    let lines = moneyline_lines(&events, team_name)?;

    if params.as_json {
        let report = report.with_lines(lines);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_lines(team_name, &lines, params.verbose));
    }

    Ok(())
}
