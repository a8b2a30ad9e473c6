use reqwest::Client;
use tracing::{debug, info};

use super::types::OddsEvent;
use crate::Result;

/// Base URL of The Odds API.
pub const ODDS_BASE_URL: &str = "https://api.the-odds-api.com";

/// Sport key for the NFL.
pub const NFL_SPORT_KEY: &str = "americanfootball_nfl";


/// Client for the odds provider's head-to-head endpoint.
///
/// One blocking-style request per call: no retry and no timeout beyond the
/// HTTP client's defaults. Failures surface as errors to the caller.
#[derive(Debug, Clone)]
pub struct OddsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OddsClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent("nfl-edge/0.1").build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn odds_url(&self, sport: &str) -> String {
        format!("{}/v4/sports/{}/odds", self.base_url, sport)
    }

    /// Query parameters for a US moneyline request in American format.
    ///
    /// The key goes out as `apiKey` (not `api_key`), the name the provider accepts.
    pub fn h2h_params(&self) -> [(&'static str, &str); 4] {
        [
            ("apiKey", self.api_key.as_str()),
            ("regions", "us"),
            ("markets", "h2h"),
            ("oddsFormat", "american"),
        ]
    }

    /// Fetch every upcoming game for `sport` with moneyline prices.
    pub async fn fetch_h2h_odds(&self, sport: &str) -> Result<Vec<OddsEvent>> {
        let url = self.odds_url(sport);
        debug!(%url, "requesting moneyline odds");

        let response = self
            .client
            .get(&url)
            .query(&self.h2h_params())
            .send()
            .await?
            .error_for_status()?;

        if let Some(remaining) = response.headers().get("x-requests-remaining") {
            info!(
                "Odds API requests remaining: {}",
                remaining.to_str().unwrap_or("?")
            );
        }

        let events = response.json::<Vec<OddsEvent>>().await?;
        info!(events = events.len(), sport, "fetched odds");
        Ok(events)
    }
}
