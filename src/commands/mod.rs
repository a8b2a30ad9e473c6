//! Command implementations for the NFL edge CLI

pub mod compare;
pub mod ratings;
pub mod report;


use std::path::PathBuf;

use crate::{
    core::default_data_dir,
    data::{loader::load_from_dir, StatRepository},
    NflError, Result, DATA_DIR_ENV_VAR, ODDS_API_KEY_ENV_VAR,
};

/// Resolve the odds API key from an explicit value or `ODDS_API_KEY`.
pub fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    api_key
        .or_else(|| std::env::var(ODDS_API_KEY_ENV_VAR).ok())
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| NflError::MissingApiKey {
            env_var: ODDS_API_KEY_ENV_VAR.to_string(),
        })
}

/// Resolve the data directory: explicit value, then `NFL_EDGE_DATA_DIR`, then
/// the default under the user cache directory.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .or_else(|| std::env::var_os(DATA_DIR_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

/// Load the repository the rating commands run against.
pub fn load_repository(data_dir: Option<PathBuf>) -> Result<StatRepository> {
    let dir = resolve_data_dir(data_dir);
    load_from_dir(&dir)
}
