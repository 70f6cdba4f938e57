mod app;
mod board;
mod slip;

pub use app::App;
pub use board::{OddsBoard, OddsBoardProps};
pub use slip::{BetSlip, BetSlipProps};
