//! Type-safe wrappers and enums for teams, positions and weeks.

pub mod filters;
pub mod position;
pub mod team;
pub mod time;

pub use filters::WeekScope;
pub use position::Position;
pub use team::Team;
pub use time::Week;
