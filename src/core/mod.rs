//! Core utilities for the NFL edge CLI
//!
//! - `numeric`: null-safe arithmetic helpers used by the rating engine
//! - `paths`: default locations on disk

pub mod numeric;
pub mod paths;

pub use numeric::{ratio, safe, safe_sqrt};
pub use paths::default_data_dir;
