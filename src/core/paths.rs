use std::path::PathBuf;

/// Path: ~/.cache/nfl-edge/data
pub fn default_data_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nfl-edge").join("data")
}
