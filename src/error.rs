use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("failed to parse feed: {0}")]
    Parse(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlipError {
    #[error("selection '{team}' is not priced in this market")]
    MissingSelection { team: String },

    #[error("stake must be greater than zero")]
    NonPositiveStake,

    #[error("odds {0:.2} are not a valid price")]
    InvalidOdds(f64),
}
