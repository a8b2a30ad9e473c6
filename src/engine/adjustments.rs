use crate::{
    core::safe,
    data::{StatLookup, StatRepository, TeamStatColumn},
};

/// Multiplier that leaves a rating unchanged.
pub const NEUTRAL: f64 = 1.0;

/// Share of the opponent's defensive EPA per play applied to the rating.
pub const DEF_EPA_SCALE: f64 = 0.5;

/// Opponent-defense multiplier: `1 + 0.5 × def_epa_per_play`.
///
/// Positive defensive EPA (the defense allows points) pushes the multiplier
/// above 1, negative below. Not clamped. Neutral when the team table is
/// empty, the column was not loaded or the opponent has no row; a null EPA
/// counts as 0.0.
pub fn get_def_adjustment(repo: &StatRepository, opponent: &str) -> f64 {
    if repo.team_stats().is_empty() {
        return NEUTRAL;
    }
    match repo.lookup_team_stat(opponent, TeamStatColumn::DefEpaPerPlay) {
        StatLookup::Value(epa) => 1.0 + safe(epa, 0.0) * DEF_EPA_SCALE,
        _ => NEUTRAL,
    }
}

/// Pace multiplier: league mean seconds per play over the team's own.
///
/// Faster teams (fewer seconds per play) get a multiplier above 1. Neutral
/// when the column was not loaded, the team has no row or its value is zero
/// or null.
pub fn get_pace_adjustment(repo: &StatRepository, team: &str) -> f64 {
    let seconds = match repo.lookup_team_stat(team, TeamStatColumn::SecondsPerPlay) {
        StatLookup::Value(Some(s)) if s != 0.0 => s,
        _ => return NEUTRAL,
    };

    match repo.league_mean(TeamStatColumn::SecondsPerPlay) {
        Some(league_avg) => league_avg / seconds,
        None => NEUTRAL,
    }
}
