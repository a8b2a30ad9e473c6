//! Read-only queries over the statistics repository

use tracing::debug;

use super::{
    models::{
        PlayerStatColumn, PlayerStatRow, SkillPlayerSet, StatLookup, TeamStatColumn, TeamStatRow,
    },
    schema::StatRepository,
};
use crate::{core::numeric::safe, Position, Week, WeekScope};

/// Number of weeks (inclusive of the latest) in the recent-form window.
pub const TRAILING_WEEKS: u16 = 3;

impl StatRepository {
    /// Latest roster week under the given scope, `None` when nothing matches.
    pub fn latest_week(&self, team: &str, scope: WeekScope) -> Option<Week> {
        match scope {
            WeekScope::Global => self.rosters().iter().map(|r| r.week).max(),
            WeekScope::Team => self
                .rosters()
                .iter()
                .filter(|r| r.team == team)
                .map(|r| r.week)
                .max(),
        }
    }

    /// Active QB/RB/WR/TE for `team` at the latest week of the whole roster table.
    pub fn get_skill_players(&self, team: &str) -> SkillPlayerSet {
        self.get_skill_players_scoped(team, WeekScope::Global)
    }

    /// Active QB/RB/WR/TE for `team`, with the latest week chosen per `scope`.
    ///
    /// Never fails: an empty table, an unknown team or a team with no active
    /// regular-season rows at that week all give an empty set.
    pub fn get_skill_players_scoped(&self, team: &str, scope: WeekScope) -> SkillPlayerSet {
        let mut set = SkillPlayerSet::default();

        let Some(latest) = self.latest_week(team, scope) else {
            return set;
        };

        let eligible = self
            .rosters()
            .iter()
            .filter(|r| r.team == team && r.week == latest && r.is_eligible());

        for entry in eligible {
            if let Ok(position) = entry.position.parse::<Position>() {
                set.push(position, entry.full_name.clone());
            }
        }

        debug!(
            team,
            week = latest.as_u16(),
            scope = %scope,
            players = set.len(),
            "resolved skill players"
        );
        set
    }

    /// Every stat row for `player`, in table order.
    fn player_rows<'s>(&'s self, player: &str) -> Vec<&'s PlayerStatRow> {
        self.player_stats()
            .iter()
            .filter(|r| r.player_display_name == player)
            .collect()
    }

    /// The row used for season-to-date values.
    ///
    /// First season-aggregate row for the player in table order, otherwise the
    /// first row of any kind.
    pub fn season_row(&self, player: &str) -> Option<&PlayerStatRow> {
        let rows = self.player_rows(player);
        if rows.len() > 1 {
            debug!(
                player,
                rows = rows.len(),
                "multiple stat rows for player, preferring season aggregate"
            );
        }
        rows.iter()
            .find(|r| r.is_season_aggregate())
            .or_else(|| rows.first())
            .copied()
    }

    /// Season value looked up by column name, without defaulting.
    pub fn lookup_player_stat(&self, player: &str, column: &str) -> StatLookup {
        match column.parse::<PlayerStatColumn>() {
            Ok(column) => self.lookup_player_column(player, column),
            Err(_) => StatLookup::UnknownColumn,
        }
    }

    pub fn lookup_player_column(&self, player: &str, column: PlayerStatColumn) -> StatLookup {
        if !self.player_columns().contains(column) {
            return StatLookup::MissingColumn;
        }
        match self.season_row(player) {
            Some(row) => StatLookup::Value(row.value(column)),
            None => StatLookup::NoRow,
        }
    }

    /// Season-to-date value of `column` for `player`; 0.0 when absent or null.
    pub fn get_player_stat(&self, player: &str, column: PlayerStatColumn) -> f64 {
        self.lookup_player_column(player, column).or_zero()
    }

    /// Sum of `column` over the player's rows in the last [`TRAILING_WEEKS`] weeks.
    ///
    /// The window ends at the player's own latest week and is inclusive, so it
    /// covers at most three distinct weeks but may hold fewer rows (byes,
    /// missed games). Rows without a week never fall inside the window.
    pub fn get_last3_total(&self, player: &str, column: PlayerStatColumn) -> f64 {
        if !self.player_columns().contains(column) {
            return 0.0;
        }

        let rows = self.player_rows(player);
        let Some(max_week) = rows.iter().filter_map(|r| r.week).max() else {
            return 0.0;
        };
        let start = max_week.window_start(TRAILING_WEEKS);

        rows.iter()
            .filter(|r| r.week.is_some_and(|w| w >= start))
            .map(|r| safe(r.value(column), 0.0))
            .sum()
    }

    /// First team stats row for `team`.
    pub fn team_row(&self, team: &str) -> Option<&TeamStatRow> {
        self.team_stats().iter().find(|r| r.team == team)
    }

    pub fn lookup_team_stat(&self, team: &str, column: TeamStatColumn) -> StatLookup {
        if !self.team_columns().contains(column) {
            return StatLookup::MissingColumn;
        }
        match self.team_row(team) {
            Some(row) => StatLookup::Value(row.value(column)),
            None => StatLookup::NoRow,
        }
    }

    /// Mean of `column` over every team with a non-null value.
    pub fn league_mean(&self, column: TeamStatColumn) -> Option<f64> {
        if !self.team_columns().contains(column) {
            return None;
        }
        let values: Vec<f64> = self
            .team_stats()
            .iter()
            .filter_map(|r| r.value(column))
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
