//! Row types for the three statistics tables and values derived from them

use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{error::NflError, Position, Week};

/// Cells nflverse exports use for missing values.
fn is_null_cell(raw: &str) -> bool {
    matches!(raw.trim(), "" | "NA" | "NaN" | "nan" | "null" | "None")
}

fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if is_null_cell(&raw) {
        return Ok(None);
    }
    raw.trim().parse::<f64>().map(Some).map_err(D::Error::custom)
}

/// Weeks sometimes arrive as floats ("5.0") from upstream exports.
fn parse_week(raw: &str) -> Result<Week, String> {
    let trimmed = raw.trim();
    if let Ok(w) = trimmed.parse::<u16>() {
        return Ok(Week::new(w));
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&f) => {
            Ok(Week::new(f as u16))
        }
        _ => Err(format!("invalid week value: {raw:?}")),
    }
}

fn de_week<'de, D>(deserializer: D) -> Result<Week, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_week(&raw).map_err(D::Error::custom)
}

fn de_opt_week<'de, D>(deserializer: D) -> Result<Option<Week>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if is_null_cell(&raw) {
        return Ok(None);
    }
    parse_week(&raw).map(Some).map_err(D::Error::custom)
}

/// Game type of a roster snapshot. Only regular-season rows are rated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum GameType {
    Regular,
    Other(String),
}

impl From<String> for GameType {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "REG" => GameType::Regular,
            _ => GameType::Other(raw),
        }
    }
}

impl From<GameType> for String {
    fn from(g: GameType) -> String {
        match g {
            GameType::Regular => "REG".to_string(),
            GameType::Other(s) => s,
        }
    }
}

/// Roster status of a player in a given week.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum RosterStatus {
    Active,
    Other(String),
}

impl From<String> for RosterStatus {
    fn from(raw: String) -> Self {
        match raw.trim() {
            "ACT" => RosterStatus::Active,
            _ => RosterStatus::Other(raw),
        }
    }
}

impl From<RosterStatus> for String {
    fn from(s: RosterStatus) -> String {
        match s {
            RosterStatus::Active => "ACT".to_string(),
            RosterStatus::Other(s) => s,
        }
    }
}

/// One row of the weekly roster table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterEntry {
    pub team: String,
    #[serde(deserialize_with = "de_week")]
    pub week: Week,
    pub game_type: GameType,
    pub status: RosterStatus,
    pub position: String,
    pub full_name: String,
}

impl RosterEntry {
    /// Active player in a regular-season week.
    pub fn is_eligible(&self) -> bool {
        self.game_type == GameType::Regular && self.status == RosterStatus::Active
    }
}

/// A named statistic column of a stats table.
pub trait StatColumn: Copy + Ord + FromStr<Err = NflError> + 'static {
    const ALL: &'static [Self];

    /// Column name in the source table
    fn as_str(&self) -> &'static str;
}

/// Statistics read from the player stats table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayerStatColumn {
    Attempts,
    Completions,
    PassingYards,
    PassingEpa,
    Pacr,
    Carries,
    RushingYards,
    RushingEpa,
    Receptions,
    ReceivingYards,
    ReceivingEpa,
    Wopr,
}

impl StatColumn for PlayerStatColumn {
    const ALL: &'static [Self] = &[
        PlayerStatColumn::Attempts,
        PlayerStatColumn::Completions,
        PlayerStatColumn::PassingYards,
        PlayerStatColumn::PassingEpa,
        PlayerStatColumn::Pacr,
        PlayerStatColumn::Carries,
        PlayerStatColumn::RushingYards,
        PlayerStatColumn::RushingEpa,
        PlayerStatColumn::Receptions,
        PlayerStatColumn::ReceivingYards,
        PlayerStatColumn::ReceivingEpa,
        PlayerStatColumn::Wopr,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            PlayerStatColumn::Attempts => "attempts",
            PlayerStatColumn::Completions => "completions",
            PlayerStatColumn::PassingYards => "passing_yards",
            PlayerStatColumn::PassingEpa => "passing_epa",
            PlayerStatColumn::Pacr => "pacr",
            PlayerStatColumn::Carries => "carries",
            PlayerStatColumn::RushingYards => "rushing_yards",
            PlayerStatColumn::RushingEpa => "rushing_epa",
            PlayerStatColumn::Receptions => "receptions",
            PlayerStatColumn::ReceivingYards => "receiving_yards",
            PlayerStatColumn::ReceivingEpa => "receiving_epa",
            PlayerStatColumn::Wopr => "wopr",
        }
    }
}

/// Statistics read from the team stats table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TeamStatColumn {
    DefEpaPerPlay,
    SecondsPerPlay,
}

impl StatColumn for TeamStatColumn {
    const ALL: &'static [Self] = &[TeamStatColumn::DefEpaPerPlay, TeamStatColumn::SecondsPerPlay];

    fn as_str(&self) -> &'static str {
        match self {
            TeamStatColumn::DefEpaPerPlay => "def_epa_per_play",
            TeamStatColumn::SecondsPerPlay => "seconds_per_play",
        }
    }
}

fn parse_column<C: StatColumn>(s: &str) -> Result<C, NflError> {
    C::ALL
        .iter()
        .copied()
        .find(|c| c.as_str() == s.trim())
        .ok_or_else(|| NflError::UnknownColumn {
            column: s.to_string(),
        })
}

impl FromStr for PlayerStatColumn {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_column(s)
    }
}

impl FromStr for TeamStatColumn {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_column(s)
    }
}

impl fmt::Display for PlayerStatColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TeamStatColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the player stats table.
///
/// Rows without a week are season aggregates; rows with a week are per-week
/// lines used for trailing-window sums.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerStatRow {
    pub player_display_name: String,
    #[serde(default, deserialize_with = "de_opt_week")]
    pub week: Option<Week>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub attempts: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub completions: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub passing_yards: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub passing_epa: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub pacr: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub carries: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub rushing_yards: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub rushing_epa: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub receptions: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub receiving_yards: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub receiving_epa: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub wopr: Option<f64>,
}

impl PlayerStatRow {
    pub fn new(player_display_name: impl Into<String>, week: Option<Week>) -> Self {
        Self {
            player_display_name: player_display_name.into(),
            week,
            ..Self::default()
        }
    }

    /// Builder-style setter used when assembling rows in code.
    pub fn with(mut self, column: PlayerStatColumn, value: f64) -> Self {
        *self.slot_mut(column) = Some(value);
        self
    }

    pub fn value(&self, column: PlayerStatColumn) -> Option<f64> {
        match column {
            PlayerStatColumn::Attempts => self.attempts,
            PlayerStatColumn::Completions => self.completions,
            PlayerStatColumn::PassingYards => self.passing_yards,
            PlayerStatColumn::PassingEpa => self.passing_epa,
            PlayerStatColumn::Pacr => self.pacr,
            PlayerStatColumn::Carries => self.carries,
            PlayerStatColumn::RushingYards => self.rushing_yards,
            PlayerStatColumn::RushingEpa => self.rushing_epa,
            PlayerStatColumn::Receptions => self.receptions,
            PlayerStatColumn::ReceivingYards => self.receiving_yards,
            PlayerStatColumn::ReceivingEpa => self.receiving_epa,
            PlayerStatColumn::Wopr => self.wopr,
        }
    }

    fn slot_mut(&mut self, column: PlayerStatColumn) -> &mut Option<f64> {
        match column {
            PlayerStatColumn::Attempts => &mut self.attempts,
            PlayerStatColumn::Completions => &mut self.completions,
            PlayerStatColumn::PassingYards => &mut self.passing_yards,
            PlayerStatColumn::PassingEpa => &mut self.passing_epa,
            PlayerStatColumn::Pacr => &mut self.pacr,
            PlayerStatColumn::Carries => &mut self.carries,
            PlayerStatColumn::RushingYards => &mut self.rushing_yards,
            PlayerStatColumn::RushingEpa => &mut self.rushing_epa,
            PlayerStatColumn::Receptions => &mut self.receptions,
            PlayerStatColumn::ReceivingYards => &mut self.receiving_yards,
            PlayerStatColumn::ReceivingEpa => &mut self.receiving_epa,
            PlayerStatColumn::Wopr => &mut self.wopr,
        }
    }

    pub fn is_season_aggregate(&self) -> bool {
        self.week.is_none()
    }
}

/// One row of the team stats table
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TeamStatRow {
    pub team: String,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub def_epa_per_play: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub seconds_per_play: Option<f64>,
}

impl TeamStatRow {
    pub fn value(&self, column: TeamStatColumn) -> Option<f64> {
        match column {
            TeamStatColumn::DefEpaPerPlay => self.def_epa_per_play,
            TeamStatColumn::SecondsPerPlay => self.seconds_per_play,
        }
    }
}

/// Active skill players of one team, in roster table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillPlayerSet {
    pub qbs: Vec<String>,
    pub rbs: Vec<String>,
    pub wrs: Vec<String>,
    pub tes: Vec<String>,
}

impl SkillPlayerSet {
    pub fn players(&self, position: Position) -> &[String] {
        match position {
            Position::QB => &self.qbs,
            Position::RB => &self.rbs,
            Position::WR => &self.wrs,
            Position::TE => &self.tes,
        }
    }

    pub(crate) fn push(&mut self, position: Position, name: String) {
        match position {
            Position::QB => self.qbs.push(name),
            Position::RB => self.rbs.push(name),
            Position::WR => self.wrs.push(name),
            Position::TE => self.tes.push(name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.qbs.is_empty() && self.rbs.is_empty() && self.wrs.is_empty() && self.tes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.qbs.len() + self.rbs.len() + self.wrs.len() + self.tes.len()
    }
}

/// Result of a non-defaulting stat lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatLookup {
    /// Column name is not a statistic this crate knows about
    UnknownColumn,
    /// Known statistic, but the loaded table had no such column
    MissingColumn,
    /// No row for the player
    NoRow,
    /// Matching row found; the cell itself may be null
    Value(Option<f64>),
}

impl StatLookup {
    /// Collapse to a number, treating every non-value case and nulls as 0.0.
    pub fn or_zero(self) -> f64 {
        match self {
            StatLookup::Value(v) => v.unwrap_or(0.0),
            _ => 0.0,
        }
    }
}
