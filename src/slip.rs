use crate::error::SlipError;
use crate::intent::{BetIntent, Direction};

// commas ignored, unparsable or negative reads as zero
pub fn parse_stake(input: &str) -> f64 {
    input
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|stake| stake.is_finite() && *stake > 0.0)
        .unwrap_or(0.0)
}

pub fn potential_profit(direction: Direction, stake: f64, odds: f64) -> f64 {
    match direction {
        Direction::Back if odds > 1.0 => stake * (odds - 1.0),
        _ => 0.0,
    }
}

pub fn liability(direction: Direction, stake: f64, odds: f64) -> f64 {
    match direction {
        Direction::Lay if odds > 1.0 => stake * (odds - 1.0),
        _ => 0.0,
    }
}

pub fn validate(intent: &BetIntent) -> Result<(), SlipError> {
    if intent.selection_id.as_deref().map_or(true, str::is_empty) {
        return Err(SlipError::MissingSelection {
            team: intent.selected_team.clone(),
        });
    }
    if !(intent.odds.is_finite() && intent.odds > 1.0) {
        return Err(SlipError::InvalidOdds(intent.odds));
    }
    if intent.stake.is_nan() || intent.stake <= 0.0 {
        return Err(SlipError::NonPositiveStake);
    }
    Ok(())
}

pub fn finalize(intent: &BetIntent, stake: f64) -> Result<BetIntent, SlipError> {
    let ticket = BetIntent {
        stake,
        ..intent.clone()
    };
    validate(&ticket)?;
    Ok(ticket)
}
