use serde::Deserialize;

use crate::error::ConfigError;

pub const BUNDLED: &str = include_str!("../board.toml");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    pub default_sport: Option<String>,
    pub loading_text: String,
    // log selections and placements
    pub verbose: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            title: "Live Odds".to_string(),
            default_sport: None,
            loading_text: "Loading live events...".to_string(),
            verbose: false,
        }
    }
}

impl BoardConfig {
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn bundled() -> Result<Self, ConfigError> {
        Self::parse_toml(BUNDLED)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "title",
                reason: "must not be empty".to_string(),
            });
        }
        if matches!(&self.default_sport, Some(sport) if sport.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "default_sport",
                reason: "must name a sport or be omitted".to_string(),
            });
        }
        Ok(())
    }

    pub fn initial_sport<'s>(&self, mut sports: impl Iterator<Item = &'s str>) -> Option<String> {
        let first = sports.next();
        let wanted = self.default_sport.as_deref();
        match wanted {
            Some(wanted) if first == Some(wanted) || sports.any(|s| s == wanted) => {
                Some(wanted.to_string())
            }
            _ => first.map(str::to_string),
        }
    }
}
