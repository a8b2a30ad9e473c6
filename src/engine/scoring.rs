//! Position scores for quarterbacks, running backs and receivers.
//!
//! Each score is a fixed linear blend of season efficiency and the trailing
//! three-week yardage total. Players below a position's volume floor are
//! [`PlayerScore::Excluded`] rather than scored as zero.

use serde::Serialize;

use crate::{
    core::{ratio, safe_sqrt},
    data::{PlayerStatColumn, StatRepository},
    Position,
};

/// Minimum pass attempts for a quarterback score
pub const QB_MIN_ATTEMPTS: f64 = 20.0;
/// Minimum carries for a running back score
pub const RB_MIN_CARRIES: f64 = 10.0;
/// Minimum receptions for a receiver score
pub const REC_MIN_RECEPTIONS: f64 = 10.0;

/// Per-yard credit for the trailing three-week total, shared by every position
const RECENT_YARDS_WEIGHT: f64 = 0.01;
const EPA_WEIGHT: f64 = 0.4;

/// A player's score, or the fact that their sample was too small to score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerScore {
    Excluded,
    Value(f64),
}

impl PlayerScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            PlayerScore::Excluded => None,
            PlayerScore::Value(v) => Some(*v),
        }
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, PlayerScore::Excluded)
    }
}

/// Quarterback score; requires 20+ attempts.
///
/// `completion% × 10 + Y/A × 2 + passing EPA × 0.4 + √PACR × 5 + last-3 passing yards × 0.01`
pub fn qb_score(repo: &StatRepository, player: &str) -> PlayerScore {
    let attempts = repo.get_player_stat(player, PlayerStatColumn::Attempts);
    if attempts < QB_MIN_ATTEMPTS {
        return PlayerScore::Excluded;
    }

    let completions = repo.get_player_stat(player, PlayerStatColumn::Completions);
    let yards = repo.get_player_stat(player, PlayerStatColumn::PassingYards);
    let epa = repo.get_player_stat(player, PlayerStatColumn::PassingEpa);
    let pacr = repo.get_player_stat(player, PlayerStatColumn::Pacr);

    let pass_pct = ratio(completions, attempts);
    let ypa = ratio(yards, attempts);

    PlayerScore::Value(
        pass_pct * 10.0
            + ypa * 2.0
            + epa * EPA_WEIGHT
            + safe_sqrt(Some(pacr)) * 5.0
            + repo.get_last3_total(player, PlayerStatColumn::PassingYards) * RECENT_YARDS_WEIGHT,
    )
}

/// Running back score; requires 10+ carries.
///
/// `carries × 0.5 + Y/C × 2 + rushing EPA × 0.4 + last-3 rushing yards × 0.01`
pub fn rb_score(repo: &StatRepository, player: &str) -> PlayerScore {
    let carries = repo.get_player_stat(player, PlayerStatColumn::Carries);
    if carries < RB_MIN_CARRIES {
        return PlayerScore::Excluded;
    }

    let yards = repo.get_player_stat(player, PlayerStatColumn::RushingYards);
    let epa = repo.get_player_stat(player, PlayerStatColumn::RushingEpa);

    let ypc = ratio(yards, carries);

    PlayerScore::Value(
        carries * 0.5
            + ypc * 2.0
            + epa * EPA_WEIGHT
            + repo.get_last3_total(player, PlayerStatColumn::RushingYards) * RECENT_YARDS_WEIGHT,
    )
}

/// Receiver score for wide receivers and tight ends; requires 10+ receptions.
///
/// `Y/R × 2 + receiving EPA × 0.4 + WOPR × 10 + last-3 receiving yards × 0.01`
pub fn rec_score(repo: &StatRepository, player: &str) -> PlayerScore {
    let receptions = repo.get_player_stat(player, PlayerStatColumn::Receptions);
    if receptions < REC_MIN_RECEPTIONS {
        return PlayerScore::Excluded;
    }

    let yards = repo.get_player_stat(player, PlayerStatColumn::ReceivingYards);
    let epa = repo.get_player_stat(player, PlayerStatColumn::ReceivingEpa);
    let wopr = repo.get_player_stat(player, PlayerStatColumn::Wopr);

    let ypr = ratio(yards, receptions);

    PlayerScore::Value(
        ypr * 2.0
            + epa * EPA_WEIGHT
            + wopr * 10.0
            + repo.get_last3_total(player, PlayerStatColumn::ReceivingYards) * RECENT_YARDS_WEIGHT,
    )
}

/// Score `player` with the formula for `position`.
pub fn score_for(repo: &StatRepository, player: &str, position: Position) -> PlayerScore {
    match position {
        Position::QB => qb_score(repo, player),
        Position::RB => rb_score(repo, player),
        Position::WR | Position::TE => rec_score(repo, player),
    }
}
