use crate::model::{OutcomeKind, Runner, RunnerOdds};

pub const DRAW_RUNNER_NAME: &str = "The Draw";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    Home,
    Draw,
    Away,
}

impl SlotPosition {
    pub fn index(self) -> usize {
        match self {
            SlotPosition::Home => 0,
            SlotPosition::Draw => 1,
            SlotPosition::Away => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot<'a> {
    pub position: SlotPosition,
    pub runner: Option<&'a Runner>,
    pub odds: Option<&'a RunnerOdds>,
}

/// The neutral outcome: tagged `draw` by the feed, or, untagged, named exactly
/// [`DRAW_RUNNER_NAME`].
pub fn is_neutral(runner: &Runner) -> bool {
    match runner.kind {
        Some(kind) => kind == OutcomeKind::Draw,
        None => runner.name.as_deref() == Some(DRAW_RUNNER_NAME),
    }
}

// home tags first, untagged in feed order, away tags last
pub fn sides(runners: &[Runner]) -> Vec<&Runner> {
    let mut sides: Vec<&Runner> = runners.iter().filter(|r| !is_neutral(r)).collect();
    sides.sort_by_key(|runner| match runner.kind {
        Some(OutcomeKind::Home) => 0,
        Some(OutcomeKind::Away) => 2,
        _ => 1,
    });
    sides
}

pub fn surplus_runners(runners: &[Runner]) -> usize {
    runners.iter().filter(|r| !is_neutral(r)).count().saturating_sub(2)
}

/// Arranges runners into home, draw and away slots, each paired with the odds
/// entry sharing its selection id.
///
/// Returns no slots when either input is empty. Markets with more than two
/// non-neutral runners keep the first two; see [`surplus_runners`].
pub fn arrange<'a>(runners: &'a [Runner], odds: &'a [RunnerOdds]) -> Vec<Slot<'a>> {
    if runners.is_empty() || odds.is_empty() {
        return Vec::new();
    }

    let sides = sides(runners);
    let draw = runners.iter().find(|r| is_neutral(r));
    let pick = |position, runner: Option<&'a Runner>| Slot {
        position,
        runner,
        odds: runner.and_then(|runner| odds_for(runner, odds)),
    };

    vec![
        pick(SlotPosition::Home, sides.first().copied()),
        pick(SlotPosition::Draw, draw),
        pick(SlotPosition::Away, sides.get(1).copied()),
    ]
}

fn odds_for<'a>(runner: &Runner, odds: &'a [RunnerOdds]) -> Option<&'a RunnerOdds> {
    let id = runner.id.as_ref()?;
    odds.iter().find(|entry| entry.selection_id.as_ref() == Some(id))
}
