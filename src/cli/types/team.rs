//! NFL franchises and the names sportsbooks list them under.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::NflError;

/// The 32 NFL franchises.
///
/// Roster and stat tables identify teams by abbreviation (`SEA`) while the
/// odds provider uses the full franchise name (`Seattle Seahawks`).
///
/// ```rust
/// use nfl_edge::Team;
///
/// let team: Team = "sea".parse().unwrap();
/// assert_eq!(team.abbr(), "SEA");
/// assert_eq!(team.full_name(), "Seattle Seahawks");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Team {
    ARI,
    ATL,
    BAL,
    BUF,
    CAR,
    CHI,
    CIN,
    CLE,
    DAL,
    DEN,
    DET,
    GB,
    HOU,
    IND,
    JAX,
    KC,
    LV,
    LAC,
    LA,
    MIA,
    MIN,
    NE,
    NO,
    NYG,
    NYJ,
    PHI,
    PIT,
    SF,
    SEA,
    TB,
    TEN,
    WAS,
}

impl Team {
    pub const ALL: [Team; 32] = [
        Team::ARI,
        Team::ATL,
        Team::BAL,
        Team::BUF,
        Team::CAR,
        Team::CHI,
        Team::CIN,
        Team::CLE,
        Team::DAL,
        Team::DEN,
        Team::DET,
        Team::GB,
        Team::HOU,
        Team::IND,
        Team::JAX,
        Team::KC,
        Team::LV,
        Team::LAC,
        Team::LA,
        Team::MIA,
        Team::MIN,
        Team::NE,
        Team::NO,
        Team::NYG,
        Team::NYJ,
        Team::PHI,
        Team::PIT,
        Team::SF,
        Team::SEA,
        Team::TB,
        Team::TEN,
        Team::WAS,
    ];

    /// Abbreviation used by the roster and stat tables.
    pub fn abbr(&self) -> &'static str {
        match self {
            Team::ARI => "ARI",
            Team::ATL => "ATL",
            Team::BAL => "BAL",
            Team::BUF => "BUF",
            Team::CAR => "CAR",
            Team::CHI => "CHI",
            Team::CIN => "CIN",
            Team::CLE => "CLE",
            Team::DAL => "DAL",
            Team::DEN => "DEN",
            Team::DET => "DET",
            Team::GB => "GB",
            Team::HOU => "HOU",
            Team::IND => "IND",
            Team::JAX => "JAX",
            Team::KC => "KC",
            Team::LV => "LV",
            Team::LAC => "LAC",
            Team::LA => "LA",
            Team::MIA => "MIA",
            Team::MIN => "MIN",
            Team::NE => "NE",
            Team::NO => "NO",
            Team::NYG => "NYG",
            Team::NYJ => "NYJ",
            Team::PHI => "PHI",
            Team::PIT => "PIT",
            Team::SF => "SF",
            Team::SEA => "SEA",
            Team::TB => "TB",
            Team::TEN => "TEN",
            Team::WAS => "WAS",
        }
    }

    /// Franchise name as listed by the odds provider.
    pub fn full_name(&self) -> &'static str {
        match self {
            Team::ARI => "Arizona Cardinals",
            Team::ATL => "Atlanta Falcons",
            Team::BAL => "Baltimore Ravens",
            Team::BUF => "Buffalo Bills",
            Team::CAR => "Carolina Panthers",
            Team::CHI => "Chicago Bears",
            Team::CIN => "Cincinnati Bengals",
            Team::CLE => "Cleveland Browns",
            Team::DAL => "Dallas Cowboys",
            Team::DEN => "Denver Broncos",
            Team::DET => "Detroit Lions",
            Team::GB => "Green Bay Packers",
            Team::HOU => "Houston Texans",
            Team::IND => "Indianapolis Colts",
            Team::JAX => "Jacksonville Jaguars",
            Team::KC => "Kansas City Chiefs",
            Team::LV => "Las Vegas Raiders",
            Team::LAC => "Los Angeles Chargers",
            Team::LA => "Los Angeles Rams",
            Team::MIA => "Miami Dolphins",
            Team::MIN => "Minnesota Vikings",
            Team::NE => "New England Patriots",
            Team::NO => "New Orleans Saints",
            Team::NYG => "New York Giants",
            Team::NYJ => "New York Jets",
            Team::PHI => "Philadelphia Eagles",
            Team::PIT => "Pittsburgh Steelers",
            Team::SF => "San Francisco 49ers",
            Team::SEA => "Seattle Seahawks",
            Team::TB => "Tampa Bay Buccaneers",
            Team::TEN => "Tennessee Titans",
            Team::WAS => "Washington Commanders",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbr())
    }
}

impl FromStr for Team {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        // Alternate abbreviations seen in other data sources
        let canonical = match upper.as_str() {
            "LAR" => "LA",
            "JAC" => "JAX",
            "WSH" => "WAS",
            "OAK" => "LV",
            other => other,
        };
        Team::ALL
            .iter()
            .copied()
            .find(|t| t.abbr() == canonical)
            .ok_or_else(|| NflError::InvalidTeam {
                team: s.to_string(),
            })
    }
}
