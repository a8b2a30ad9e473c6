//! Team rating: weighted sum of player scores scaled by the matchup multipliers.

use serde::Serialize;
use tracing::debug;

use super::{
    adjustments::{get_def_adjustment, get_pace_adjustment},
    scoring::{score_for, PlayerScore},
};
use crate::{data::StatRepository, Position, WeekScope};

pub const QB_WEIGHT: f64 = 1.5;
pub const RB_WEIGHT: f64 = 1.0;
pub const WR_WEIGHT: f64 = 1.0;
pub const TE_WEIGHT: f64 = 0.8;

/// Weight applied to a player's score when it enters the team total.
pub fn position_weight(position: Position) -> f64 {
    match position {
        Position::QB => QB_WEIGHT,
        Position::RB => RB_WEIGHT,
        Position::WR => WR_WEIGHT,
        Position::TE => TE_WEIGHT,
    }
}

/// One player's part in a team rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerContribution {
    pub name: String,
    pub position: Position,
    pub score: PlayerScore,
    pub weight: f64,
    /// `score × weight`, `None` when the player was excluded
    pub contribution: Option<f64>,
}

/// A team rating together with everything that went into it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamBreakdown {
    pub team: String,
    pub opponent: String,
    pub players: Vec<PlayerContribution>,
    /// Weighted player total before adjustments
    pub raw_total: f64,
    pub def_adjustment: f64,
    pub pace_adjustment: f64,
    pub rating: f64,
}

impl TeamBreakdown {
    pub fn scored_players(&self) -> impl Iterator<Item = &PlayerContribution> {
        self.players.iter().filter(|p| !p.score.is_excluded())
    }
}

/// Builds team ratings against a repository.
///
/// # Examples
///
/// ```rust
/// use nfl_edge::{data::StatRepository, engine::TeamModelBuilder, WeekScope};
///
/// let repo = StatRepository::with_all_columns(vec![], vec![], vec![]);
/// let builder = TeamModelBuilder::new(&repo).week_scope(WeekScope::Team);
/// assert_eq!(builder.build_team_model("SEA", "NE"), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TeamModelBuilder<'a> {
    repo: &'a StatRepository,
    week_scope: WeekScope,
}

impl<'a> TeamModelBuilder<'a> {
    pub fn new(repo: &'a StatRepository) -> Self {
        Self {
            repo,
            week_scope: WeekScope::default(),
        }
    }

    pub fn week_scope(mut self, scope: WeekScope) -> Self {
        self.week_scope = scope;
        self
    }

    /// Offensive rating of `team` facing `opponent`.
    pub fn build_team_model(&self, team: &str, opponent: &str) -> f64 {
        self.build_team_breakdown(team, opponent).rating
    }

    /// Rating of `team` facing `opponent`, with per-player detail.
    ///
    /// Excluded players are listed but add nothing. The multipliers scale the
    /// aggregate once, defense first, then pace. An empty roster rates 0.
    pub fn build_team_breakdown(&self, team: &str, opponent: &str) -> TeamBreakdown {
        let skill = self.repo.get_skill_players_scoped(team, self.week_scope);

        let def_adjustment = get_def_adjustment(self.repo, opponent);
        let pace_adjustment = get_pace_adjustment(self.repo, team);

        let mut players = Vec::with_capacity(skill.len());
        let mut raw_total = 0.0;

        for position in Position::ALL {
            let weight = position_weight(position);
            for name in skill.players(position) {
                let score = score_for(self.repo, name, position);
                let contribution = score.value().map(|s| s * weight);
                match contribution {
                    Some(c) => raw_total += c,
                    None => debug!(team, player = %name, %position, "below volume floor"),
                }
                players.push(PlayerContribution {
                    name: name.clone(),
                    position,
                    score,
                    weight,
                    contribution,
                });
            }
        }

        let mut rating = raw_total;
        rating *= def_adjustment;
        rating *= pace_adjustment;

        debug!(
            team,
            opponent, raw_total, def_adjustment, pace_adjustment, rating, "team rating built"
        );

        TeamBreakdown {
            team: team.to_string(),
            opponent: opponent.to_string(),
            players,
            raw_total,
            def_adjustment,
            pace_adjustment,
            rating,
        }
    }
}

/// Offensive rating of `team` facing `opponent` with the global latest week.
pub fn build_team_model(repo: &StatRepository, team: &str, opponent: &str) -> f64 {
    TeamModelBuilder::new(repo).build_team_model(team, opponent)
}
