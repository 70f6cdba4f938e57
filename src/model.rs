use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_TEAM: &str = "Unknown";
pub const UNKNOWN_MARKET: &str = "Unknown Market";

// Feeds send ids as strings or bare numbers. Numbers keep the digits sent,
// so a market id 1.10 stays "1.10".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Id(String);

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Id(s)),
            Value::Number(n) => Ok(Id(n.to_string())),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(&other.to_string()),
                &"a string or number id",
            )),
        }
    }
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Id(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn or_empty(id: Option<&Id>) -> String {
        id.map(|id| id.0.clone()).unwrap_or_default()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    #[serde(alias = "sideA")]
    Home,
    #[serde(alias = "neutral")]
    Draw,
    #[serde(alias = "sideB")]
    Away,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runner {
    #[serde(default, alias = "selectionId")]
    pub id: Option<Id>,
    #[serde(default, alias = "runnerName")]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: Option<OutcomeKind>,
}

impl Runner {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Runner {
            id: Some(Id::new(id)),
            name: Some(name.into()),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: OutcomeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_TEAM)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sport_name: Option<String>,
    #[serde(default, alias = "seriesName")]
    pub competition_name: Option<String>,
    #[serde(default)]
    pub live: Option<bool>,
    #[serde(default)]
    pub runners: Vec<Runner>,
}

impl Event {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_MARKET)
    }

    pub fn sport(&self) -> &str {
        self.sport_name.as_deref().unwrap_or_default()
    }

    pub fn competition(&self) -> &str {
        self.competition_name.as_deref().unwrap_or_default()
    }

    pub fn runner_named(&self, name: &str) -> Option<&Runner> {
        self.runners
            .iter()
            .find(|runner| runner.name.as_deref() == Some(name))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub size: Option<f64>,
}

impl PriceLevel {
    pub fn at(price: f64) -> Self {
        PriceLevel {
            price: Some(price),
            size: None,
        }
    }
}

// best price first on both ladders
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerOdds {
    #[serde(default)]
    pub selection_id: Option<Id>,
    #[serde(default, alias = "availableToBack")]
    pub back: Vec<PriceLevel>,
    #[serde(default, alias = "availableToLay")]
    pub lay: Vec<PriceLevel>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    #[serde(default)]
    pub market_id: Option<Id>,
    #[serde(default, alias = "inplay")]
    pub in_play: Option<bool>,
    #[serde(default)]
    pub odds: Vec<RunnerOdds>,
}

impl Market {
    pub fn odds_for(&self, selection: &Id) -> Option<&RunnerOdds> {
        self.odds
            .iter()
            .find(|odds| odds.selection_id.as_ref() == Some(selection))
    }

    // first entry per selection id wins
    pub fn dedup_odds(&mut self) -> usize {
        let before = self.odds.len();
        let mut seen: Vec<Id> = Vec::with_capacity(before);
        self.odds.retain(|odds| match &odds.selection_id {
            Some(id) if seen.contains(id) => false,
            Some(id) => {
                seen.push(id.clone());
                true
            }
            None => true,
        });
        before - self.odds.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBundle {
    #[serde(default)]
    pub event: Event,
    #[serde(default, alias = "market")]
    pub markets: Vec<Market>,
}

impl EventBundle {
    pub fn first_market(&self) -> Option<&Market> {
        self.markets.first()
    }

    pub fn is_live(&self) -> bool {
        self.first_market()
            .and_then(|market| market.in_play)
            .unwrap_or(false)
    }
}
