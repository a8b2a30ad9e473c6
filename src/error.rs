//! Error types for the NFL edge CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NflError>;

#[derive(Error, Debug)]
pub enum NflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open data file {path}: {source}")]
    DataFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Odds API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Required column `{column}` missing from {table}")]
    MissingColumn { table: String, column: String },

    #[error("Unknown statistic column: {column}")]
    UnknownColumn { column: String },

    #[error("Invalid team abbreviation: {team}")]
    InvalidTeam { team: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid American odds: {odds}")]
    InvalidOdds { odds: f64 },

    #[error("No {what} listed for {home_team} vs {away_team}")]
    MissingOdds {
        what: String,
        home_team: String,
        away_team: String,
    },
}
