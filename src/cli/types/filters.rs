//! Filter types for roster resolution.

use std::fmt;

/// How the "latest week" is chosen when resolving a team's active roster.
///
/// `Global` takes the highest week anywhere in the roster table, so a team
/// whose latest roster snapshot lags the rest of the league (bye week, late
/// data) resolves to no players at all. `Team` takes the highest week present
/// for the requested team instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WeekScope {
    /// Latest week across the whole roster table
    #[default]
    Global,
    /// Latest week the requested team appears in
    Team,
}

impl fmt::Display for WeekScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeekScope::Global => "global",
            WeekScope::Team => "team",
        };
        write!(f, "{}", s)
    }
}
