//! In-memory statistics layer
//!
//! This module holds the three immutable tables the rating engine reads:
//! - `models`: row types, statistic column enums and derived values
//! - `schema`: column presence and the [`StatRepository`] itself
//! - `loader`: CSV loading into a repository
//! - `queries`: roster resolution and stat lookups

pub mod loader;
pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::{ColumnSet, StatRepository};
