pub mod arrange;
pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod feed;
pub mod intent;
pub mod model;
pub mod odds_format;
pub mod price;
pub mod slip;

pub use board::{board_rows, select, BoardRow, BoardState};
pub use error::{ConfigError, FeedError, SlipError};
pub use feed::Feed;
pub use intent::{build_intent, BetIntent, Direction};
