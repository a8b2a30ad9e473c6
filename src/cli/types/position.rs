//! Skill positions used by the rating engine.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::NflError;

/// Offensive skill positions.
///
/// Roster tables list every position on a team; only these four feed the
/// team rating. Anything else fails to parse and is skipped during roster
/// resolution.
///
/// # Examples
///
/// ```rust
/// use nfl_edge::Position;
///
/// assert_eq!("qb".parse::<Position>().unwrap(), Position::QB);
/// assert!("OL".parse::<Position>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(NflError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_conversion() {
        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_non_skill_positions_rejected() {
        for raw in ["OL", "DL", "K", "P", "FB", ""] {
            assert!(raw.parse::<Position>().is_err(), "{raw} should not parse");
        }
    }
}
