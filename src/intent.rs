use serde::{Deserialize, Serialize};

use crate::arrange::sides;
use crate::model::{Event, Id, Market, UNKNOWN_TEAM};
use crate::price::capture_price;

pub const MATCH_ODDS: &str = "match odds";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Back,
    Lay,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Back => "Back",
            Direction::Lay => "Lay",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "back" => Some(Direction::Back),
            "lay" => Some(Direction::Lay),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetIntent {
    pub home_team: String,
    pub away_team: String,
    pub event_id: String,
    pub market_id: String,
    pub selection_id: Option<String>,
    pub stake: f64,
    pub odds: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub side: String,
    pub bet_type: String,
    pub sport_name: String,
    pub competition_name: String,
    pub event_name: String,
    pub selected_team: String,
}

impl BetIntent {
    pub fn direction(&self) -> Option<Direction> {
        Direction::parse(&self.side)
    }

    pub fn targets(&self, event_id: &str, team: &str, direction: Direction) -> bool {
        self.event_id == event_id
            && self.selected_team == team
            && self.direction() == Some(direction)
    }
}

/// Builds the intent for a click on `runner_name`'s `direction` price.
///
/// Missing payload fields degrade to placeholders. An unknown runner name
/// leaves `selection_id` empty for the slip to reject.
pub fn build_intent(
    event: &Event,
    market: Option<&Market>,
    runner_name: &str,
    direction: &str,
    price: f64,
) -> BetIntent {
    let sides = sides(&event.runners);
    let team = |idx: usize| {
        sides
            .get(idx)
            .map(|runner| runner.display_name())
            .unwrap_or(UNKNOWN_TEAM)
            .to_string()
    };

    BetIntent {
        home_team: team(0),
        away_team: team(1),
        event_id: Id::or_empty(event.id.as_ref()),
        market_id: Id::or_empty(market.and_then(|market| market.market_id.as_ref())),
        selection_id: event
            .runner_named(runner_name)
            .and_then(|runner| runner.id.as_ref())
            .map(|id| id.to_string()),
        stake: 0.0,
        odds: if price.is_finite() { capture_price(price) } else { 0.0 },
        category: MATCH_ODDS.to_string(),
        side: direction.to_lowercase(),
        bet_type: direction.to_string(),
        sport_name: event.sport().to_string(),
        competition_name: event.competition().to_string(),
        event_name: event.display_name().to_string(),
        selected_team: runner_name.to_string(),
    }
}
