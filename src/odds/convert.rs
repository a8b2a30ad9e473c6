//! American odds to implied probability, and moneyline interpretation.

use serde::Serialize;

use super::types::OddsEvent;
use crate::{NflError, Result};

/// Implied win probability of an American price, ignoring bookmaker margin.
///
/// `+150` → 100 / 250 = 0.4, `-150` → 150 / 250 = 0.6. A price of zero has
/// no meaning in this format and is rejected, as are non-finite prices.
///
/// ```rust
/// use nfl_edge::odds::american_to_prob;
///
/// assert_eq!(american_to_prob(150.0).unwrap(), 0.4);
/// assert_eq!(american_to_prob(-150.0).unwrap(), 0.6);
/// assert!(american_to_prob(0.0).is_err());
/// ```
pub fn american_to_prob(odds: f64) -> Result<f64> {
    if odds == 0.0 || !odds.is_finite() {
        return Err(NflError::InvalidOdds { odds });
    }
    if odds > 0.0 {
        Ok(100.0 / (odds + 100.0))
    } else {
        Ok(-odds / (-odds + 100.0))
    }
}

/// Sum of implied probabilities across a market's outcomes.
pub fn overround(probs: &[f64]) -> f64 {
    probs.iter().sum()
}

/// Implied probabilities rescaled to sum to 1.
pub fn no_vig(probs: &[f64]) -> Vec<f64> {
    let total = overround(probs);
    if total <= 0.0 {
        return probs.to_vec();
    }
    probs.iter().map(|p| p / total).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpliedOutcome {
    pub name: String,
    pub price: f64,
    pub implied: f64,
    /// Implied probability with the bookmaker margin removed
    pub fair: f64,
}

/// The first bookmaker's first market for one game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLine {
    pub home_team: String,
    pub away_team: String,
    pub bookmaker: String,
    pub outcomes: Vec<ImpliedOutcome>,
    pub overround: f64,
}

impl GameLine {
    pub fn outcome(&self, name: &str) -> Option<&ImpliedOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

fn missing(what: &str, event: &OddsEvent) -> NflError {
    NflError::MissingOdds {
        what: what.to_string(),
        home_team: event.home_team.clone(),
        away_team: event.away_team.clone(),
    }
}

/// Interpret one event. Only the first bookmaker and its first market count.
pub fn game_line(event: &OddsEvent) -> Result<GameLine> {
    let bookmaker = event
        .bookmakers
        .first()
        .ok_or_else(|| missing("bookmakers", event))?;
    let market = bookmaker
        .markets
        .first()
        .ok_or_else(|| missing("markets", event))?;

    let implied = market
        .outcomes
        .iter()
        .map(|o| american_to_prob(o.price))
        .collect::<Result<Vec<f64>>>()?;
    let fair = no_vig(&implied);

    let outcomes = market
        .outcomes
        .iter()
        .zip(implied.iter().zip(fair))
        .map(|(o, (&implied, fair))| ImpliedOutcome {
            name: o.name.clone(),
            price: o.price,
            implied,
            fair,
        })
        .collect();

    Ok(GameLine {
        home_team: event.home_team.clone(),
        away_team: event.away_team.clone(),
        bookmaker: bookmaker.title.clone(),
        outcomes,
        overround: overround(&implied),
    })
}

/// Lines for every game in which `team_name` plays, home or away.
pub fn moneyline_lines(events: &[OddsEvent], team_name: &str) -> Result<Vec<GameLine>> {
    events
        .iter()
        .filter(|e| e.involves(team_name))
        .map(game_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::types::{Bookmaker, Market, Outcome};
    use approx::assert_relative_eq;

    fn event(home: &str, away: &str, prices: &[(&str, f64)]) -> OddsEvent {
        OddsEvent {
            id: None,
            commence_time: None,
            home_team: home.to_string(),
            away_team: away.to_string(),
            bookmakers: vec![Bookmaker {
                key: "draftkings".to_string(),
                title: "DraftKings".to_string(),
                markets: vec![Market {
                    key: "h2h".to_string(),
                    outcomes: prices
                        .iter()
                        .map(|(name, price)| Outcome {
                            name: name.to_string(),
                            price: *price,
                        })
                        .collect(),
                }],
            }],
        }
    }

    #[test]
    fn test_american_to_prob_examples() {
        assert_eq!(american_to_prob(150.0).unwrap(), 100.0 / 250.0);
        assert_eq!(american_to_prob(-150.0).unwrap(), 150.0 / 250.0);
        assert_eq!(american_to_prob(100.0).unwrap(), 0.5);
        assert_eq!(american_to_prob(-100.0).unwrap(), 0.5);
    }

    #[test]
    fn test_american_to_prob_monotonic() {
        // More favoured (lower odds) means higher probability
        let prices = [400.0, 200.0, 110.0, 100.0, -110.0, -200.0, -400.0];
        let probs: Vec<f64> = prices.iter().map(|&p| american_to_prob(p).unwrap()).collect();
        assert!(probs.windows(2).all(|w| w[0] <= w[1]), "{probs:?}");
        assert!(probs.iter().all(|&p| p > 0.0 && p < 1.0));
    }

    #[test]
    fn test_american_to_prob_rejects_zero() {
        assert!(matches!(
            american_to_prob(0.0),
            Err(NflError::InvalidOdds { .. })
        ));
        assert!(american_to_prob(f64::NAN).is_err());
    }

    #[test]
    fn test_no_vig_normalizes() {
        let implied = [american_to_prob(-110.0).unwrap(), american_to_prob(-110.0).unwrap()];
        assert!(overround(&implied) > 1.0);
        let fair = no_vig(&implied);
        assert_relative_eq!(fair[0], 0.5);
        assert_relative_eq!(fair.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_moneyline_lines_selects_team_games() {
        let events = vec![
            event(
                "Seattle Seahawks",
                "New England Patriots",
                &[("Seattle Seahawks", -150.0), ("New England Patriots", 130.0)],
            ),
            event(
                "Buffalo Bills",
                "Miami Dolphins",
                &[("Buffalo Bills", -200.0), ("Miami Dolphins", 170.0)],
            ),
        ];

        let lines = moneyline_lines(&events, "Seattle Seahawks").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].bookmaker, "DraftKings");
        let sea = lines[0].outcome("Seattle Seahawks").unwrap();
        assert_relative_eq!(sea.implied, 0.6);
        assert!(sea.fair < sea.implied);

        // Away side is matched too
        assert_eq!(moneyline_lines(&events, "Miami Dolphins").unwrap().len(), 1);
        assert!(moneyline_lines(&events, "Detroit Lions").unwrap().is_empty());
    }

    #[test]
    fn test_missing_bookmaker_is_an_error() {
        let mut bare = event("Seattle Seahawks", "New England Patriots", &[]);
        bare.bookmakers.clear();

        match moneyline_lines(&[bare], "Seattle Seahawks").unwrap_err() {
            NflError::MissingOdds { what, .. } => assert_eq!(what, "bookmakers"),
            other => panic!("Expected MissingOdds, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_market_is_an_error() {
        let mut bare = event("Seattle Seahawks", "New England Patriots", &[]);
        bare.bookmakers[0].markets.clear();

        match game_line(&bare).unwrap_err() {
            NflError::MissingOdds { what, .. } => assert_eq!(what, "markets"),
            other => panic!("Expected MissingOdds, got {other:?}"),
        }
    }
}
