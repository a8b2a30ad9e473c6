//! CSV loading for the roster, player stats and team stats tables.
//!
//! The tables follow the nflverse export layout. Identity columns (team,
//! week, player name, ...) are required; statistic columns are optional and
//! their presence is recorded in the repository's [`ColumnSet`]s.

use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::{fs::File, io::Read, path::Path};
use tracing::{info, warn};

use super::{
    models::{PlayerStatColumn, PlayerStatRow, RosterEntry, TeamStatColumn, TeamStatRow},
    schema::{ColumnSet, StatRepository},
};
use crate::{NflError, Result};

pub const ROSTERS_FILE: &str = "rosters_weekly.csv";
pub const PLAYER_STATS_FILE: &str = "player_stats.csv";
pub const TEAM_STATS_FILE: &str = "team_stats.csv";

const ROSTER_COLUMNS: [&str; 6] = ["team", "week", "game_type", "status", "position", "full_name"];
const PLAYER_STAT_COLUMNS: [&str; 1] = ["player_display_name"];
const TEAM_STAT_COLUMNS: [&str; 1] = ["team"];

fn require_columns(headers: &StringRecord, required: &[&str], table: &str) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(NflError::MissingColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Read every row of a table, skipping (and logging) rows that fail to parse.
fn read_rows<R: Read, T: DeserializeOwned>(
    rdr: R,
    required: &[&str],
    table: &str,
) -> Result<(Vec<T>, StringRecord)> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();
    require_columns(&headers, required, table)?;

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!(table, row = line + 1, "skipping malformed row: {}", e),
        }
    }
    Ok((rows, headers))
}

pub fn load_rosters_from_reader<R: Read>(rdr: R) -> Result<Vec<RosterEntry>> {
    let (rows, _) = read_rows(rdr, &ROSTER_COLUMNS, ROSTERS_FILE)?;
    Ok(rows)
}

pub fn load_player_stats_from_reader<R: Read>(
    rdr: R,
) -> Result<(Vec<PlayerStatRow>, ColumnSet<PlayerStatColumn>)> {
    let (rows, headers) = read_rows(rdr, &PLAYER_STAT_COLUMNS, PLAYER_STATS_FILE)?;
    Ok((rows, ColumnSet::from_headers(&headers)))
}

pub fn load_team_stats_from_reader<R: Read>(
    rdr: R,
) -> Result<(Vec<TeamStatRow>, ColumnSet<TeamStatColumn>)> {
    let (rows, headers) = read_rows(rdr, &TEAM_STAT_COLUMNS, TEAM_STATS_FILE)?;
    Ok((rows, ColumnSet::from_headers(&headers)))
}

/// Build a repository from three CSV sources.
pub fn load_from_readers<R1: Read, R2: Read, R3: Read>(
    rosters: R1,
    player_stats: R2,
    team_stats: R3,
) -> Result<StatRepository> {
    let rosters = load_rosters_from_reader(rosters)?;
    let (player_stats, player_columns) = load_player_stats_from_reader(player_stats)?;
    let (team_stats, team_columns) = load_team_stats_from_reader(team_stats)?;

    for column in player_columns.missing() {
        warn!(column = %column, "player stats table has no such column; treated as 0.0");
    }
    for column in team_columns.missing() {
        warn!(column = %column, "team stats table has no such column; adjustment stays neutral");
    }

    info!(
        rosters = rosters.len(),
        player_stats = player_stats.len(),
        team_stats = team_stats.len(),
        "datasets loaded"
    );

    Ok(StatRepository::new(
        rosters,
        player_stats,
        player_columns,
        team_stats,
        team_columns,
    ))
}

fn open_table(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| NflError::DataFile {
        path: path.display().to_string(),
        source,
    })
}

/// Load the three tables from `dir` (see [`ROSTERS_FILE`] and friends).
pub fn load_from_dir(dir: &Path) -> Result<StatRepository> {
    info!(dir = %dir.display(), "loading NFL datasets");
    let rosters = open_table(&dir.join(ROSTERS_FILE))?;
    let player_stats = open_table(&dir.join(PLAYER_STATS_FILE))?;
    let team_stats = open_table(&dir.join(TEAM_STATS_FILE))?;
    load_from_readers(rosters, player_stats, team_stats)
}
