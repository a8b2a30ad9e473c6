//! Column schema and the in-memory statistics repository

use csv::StringRecord;
use std::collections::BTreeSet;

use super::models::{
    PlayerStatColumn, PlayerStatRow, RosterEntry, StatColumn, TeamStatColumn, TeamStatRow,
};

/// The statistic columns actually present in a loaded table.
///
/// Recorded once from the CSV header so lookups can tell "column never
/// loaded" apart from "value is null".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet<C: StatColumn> {
    present: BTreeSet<C>,
}

impl<C: StatColumn> ColumnSet<C> {
    /// Every known column present.
    pub fn all() -> Self {
        Self {
            present: C::ALL.iter().copied().collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            present: BTreeSet::new(),
        }
    }

    pub fn from_columns(columns: impl IntoIterator<Item = C>) -> Self {
        Self {
            present: columns.into_iter().collect(),
        }
    }

    /// Known columns named in a CSV header; unknown header names are ignored.
    pub fn from_headers(headers: &StringRecord) -> Self {
        Self {
            present: headers
                .iter()
                .filter_map(|h| h.parse::<C>().ok())
                .collect(),
        }
    }

    pub fn contains(&self, column: C) -> bool {
        self.present.contains(&column)
    }

    pub fn without(mut self, column: C) -> Self {
        self.present.remove(&column);
        self
    }

    /// Known columns absent from the table, in declaration order.
    pub fn missing(&self) -> impl Iterator<Item = C> + '_ {
        C::ALL.iter().copied().filter(move |c| !self.present.contains(c))
    }
}

/// Immutable roster, player and team tables.
///
/// Built once at startup (see [`crate::data::loader`]) and handed by
/// reference to every query. Nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct StatRepository {
    rosters: Vec<RosterEntry>,
    player_stats: Vec<PlayerStatRow>,
    team_stats: Vec<TeamStatRow>,
    player_columns: ColumnSet<PlayerStatColumn>,
    team_columns: ColumnSet<TeamStatColumn>,
}

impl StatRepository {
    pub fn new(
        rosters: Vec<RosterEntry>,
        player_stats: Vec<PlayerStatRow>,
        player_columns: ColumnSet<PlayerStatColumn>,
        team_stats: Vec<TeamStatRow>,
        team_columns: ColumnSet<TeamStatColumn>,
    ) -> Self {
        Self {
            rosters,
            player_stats,
            team_stats,
            player_columns,
            team_columns,
        }
    }

    /// Repository whose stat tables carry every known column.
    pub fn with_all_columns(
        rosters: Vec<RosterEntry>,
        player_stats: Vec<PlayerStatRow>,
        team_stats: Vec<TeamStatRow>,
    ) -> Self {
        Self::new(
            rosters,
            player_stats,
            ColumnSet::all(),
            team_stats,
            ColumnSet::all(),
        )
    }

    pub fn rosters(&self) -> &[RosterEntry] {
        &self.rosters
    }

    pub fn player_stats(&self) -> &[PlayerStatRow] {
        &self.player_stats
    }

    pub fn team_stats(&self) -> &[TeamStatRow] {
        &self.team_stats
    }

    pub fn player_columns(&self) -> &ColumnSet<PlayerStatColumn> {
        &self.player_columns
    }

    pub fn team_columns(&self) -> &ColumnSet<TeamStatColumn> {
        &self.team_columns
    }
}
