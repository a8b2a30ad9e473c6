//! Matchup report assembly and text rendering shared by the commands.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::{
    data::StatRepository,
    engine::{PlayerScore, TeamBreakdown, TeamModelBuilder},
    odds::GameLine,
    Team, WeekScope,
};

/// Parameters shared by the rating commands
#[derive(Debug, Clone)]
pub struct MatchupParams {
    pub home: Team,
    pub away: Team,
    pub data_dir: Option<PathBuf>,
    pub week_scope: WeekScope,
    pub as_json: bool,
    pub verbose: bool,
}

/// Both teams' ratings and, when fetched, the sportsbook lines for the game
#[derive(Debug, Clone, Serialize)]
pub struct MatchupReport {
    pub home: TeamBreakdown,
    pub away: TeamBreakdown,
    /// Home rating minus away rating
    pub model_edge: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<GameLine>,
}

impl MatchupReport {
    /// Rate each side against the other.
    pub fn build(repo: &StatRepository, home: Team, away: Team, week_scope: WeekScope) -> Self {
        let builder = TeamModelBuilder::new(repo).week_scope(week_scope);
        let home_side = builder.build_team_breakdown(home.abbr(), away.abbr());
        let away_side = builder.build_team_breakdown(away.abbr(), home.abbr());
        let model_edge = home_side.rating - away_side.rating;

        Self {
            home: home_side,
            away: away_side,
            model_edge,
            lines: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: Vec<GameLine>) -> Self {
        self.lines = lines;
        self
    }
}

impl fmt::Display for TeamBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vs {} (defense x{:.3}, pace x{:.3})",
            self.team, self.opponent, self.def_adjustment, self.pace_adjustment
        )?;
        if self.players.is_empty() {
            writeln!(f, "  no active skill players")?;
        }
        for p in &self.players {
            match p.score {
                PlayerScore::Value(score) => writeln!(
                    f,
                    "  {:<2}  {:<24} {:>7.2} x{:.1} = {:>7.2}",
                    p.position.as_str(),
                    p.name,
                    score,
                    p.weight,
                    score * p.weight
                )?,
                PlayerScore::Excluded => {
                    writeln!(f, "  {:<2}  {:<24} excluded", p.position.as_str(), p.name)?
                }
            }
        }
        writeln!(f, "  raw total {:.2}", self.raw_total)
    }
}

/// Ratings block and model edge, with per-player detail when `verbose`
pub struct RatingsView<'a> {
    pub report: &'a MatchupReport,
    pub verbose: bool,
}

impl fmt::Display for RatingsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "\nMODEL RATINGS")?;
        writeln!(f, "{} : {:.2}", report.home.team, report.home.rating)?;
        writeln!(f, "{} : {:.2}", report.away.team, report.away.rating)?;

        if self.verbose {
            writeln!(f)?;
            write!(f, "{}{}", report.home, report.away)?;
        }

        writeln!(
            f,
            "\nModel Edge (raw rating difference): {:.2}",
            report.model_edge
        )
    }
}

/// Moneyline block: each outcome's price and implied probability
pub struct LinesView<'a> {
    pub team_name: &'a str,
    pub lines: &'a [GameLine],
    pub verbose: bool,
}

impl fmt::Display for LinesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nSportsbook Moneyline:")?;
        if self.lines.is_empty() {
            writeln!(f, "No listed games for {}", self.team_name)?;
        }
        for line in self.lines {
            if self.verbose {
                writeln!(
                    f,
                    "{} @ {} ({}, overround {:.3})",
                    line.away_team, line.home_team, line.bookmaker, line.overround
                )?;
            }
            for outcome in &line.outcomes {
                writeln!(
                    f,
                    "{} ML {} → Implied {:.3}",
                    outcome.name, outcome.price, outcome.implied
                )?;
            }
        }
        Ok(())
    }
}

pub fn render_ratings(report: &MatchupReport, verbose: bool) -> String {
    RatingsView { report, verbose }.to_string()
}

pub fn render_lines(team_name: &str, lines: &[GameLine], verbose: bool) -> String {
    LinesView {
        team_name,
        lines,
        verbose,
    }
    .to_string()
}
