use serde::{Deserialize, Serialize};

/// One game from the odds provider's `/odds` endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OddsEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub commence_time: Option<String>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

impl OddsEvent {
    pub fn involves(&self, team_name: &str) -> bool {
        self.home_team == team_name || self.away_team == team_name
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<Market>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Market {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// A single priced outcome; `price` is in American format
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Outcome {
    pub name: String,
    pub price: f64,
}
