use std::rc::Rc;

use yew::Reducible;

use crate::arrange::{arrange, surplus_runners, SlotPosition};
use crate::intent::{build_intent, BetIntent, Direction};
use crate::model::{EventBundle, Id, PriceLevel, RunnerOdds};
use crate::price::{best_level_price, format_price, NO_PRICE};

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub direction: Direction,
    pub text: String,
    pub price: Option<f64>,
    named: bool,
}

impl Cell {
    fn new(direction: Direction, levels: Option<&[PriceLevel]>, named: bool) -> Self {
        let price = best_level_price(levels);
        Cell {
            direction,
            text: price.map(format_price).unwrap_or_else(|| NO_PRICE.to_string()),
            price,
            named,
        }
    }

    // a runner without a feed name cannot be resolved to a selection id
    pub fn is_selectable(&self) -> bool {
        self.named && self.price.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlotView {
    pub position: SlotPosition,
    pub team: Option<String>,
    pub back: Cell,
    pub lay: Cell,
}

impl SlotView {
    pub fn cells(&self) -> [&Cell; 2] {
        [&self.back, &self.lay]
    }

    pub fn is_placeholder(&self) -> bool {
        self.team.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardRow {
    pub index: usize,
    pub event_id: String,
    pub title: String,
    pub competition: String,
    pub live: bool,
    // empty when the market cannot be rendered
    pub slots: Vec<SlotView>,
    pub surplus_runners: usize,
}

impl BoardRow {
    pub fn is_available(&self) -> bool {
        !self.slots.is_empty()
    }
}

fn ladder(odds: Option<&RunnerOdds>, direction: Direction) -> Option<&[PriceLevel]> {
    odds.map(|odds| match direction {
        Direction::Back => odds.back.as_slice(),
        Direction::Lay => odds.lay.as_slice(),
    })
}

fn market_odds(bundle: &EventBundle) -> &[RunnerOdds] {
    bundle
        .first_market()
        .map(|market| market.odds.as_slice())
        .unwrap_or_default()
}

pub fn board_row(index: usize, bundle: &EventBundle) -> BoardRow {
    let event = &bundle.event;
    let slots = arrange(&event.runners, market_odds(bundle))
        .into_iter()
        .map(|slot| {
            let named = slot.runner.is_some_and(|runner| runner.name.is_some());
            SlotView {
                position: slot.position,
                team: slot.runner.map(|runner| runner.display_name().to_string()),
                back: Cell::new(Direction::Back, ladder(slot.odds, Direction::Back), named),
                lay: Cell::new(Direction::Lay, ladder(slot.odds, Direction::Lay), named),
            }
        })
        .collect();

    BoardRow {
        index,
        event_id: Id::or_empty(event.id.as_ref()),
        title: event.display_name().to_string(),
        competition: event.competition().to_string(),
        live: bundle.is_live(),
        slots,
        surplus_runners: surplus_runners(&event.runners),
    }
}

pub fn board_rows(events: &[EventBundle]) -> Vec<BoardRow> {
    events
        .iter()
        .enumerate()
        .map(|(index, bundle)| board_row(index, bundle))
        .collect()
}

/// Intent for a click on the `direction` price of the runner in `position`.
/// Placeholder slots, nameless runners and cells without a price select nothing.
pub fn select(bundle: &EventBundle, position: SlotPosition, direction: Direction) -> Option<BetIntent> {
    let slots = arrange(&bundle.event.runners, market_odds(bundle));
    let slot = slots.get(position.index())?;
    let name = slot.runner?.name.as_deref()?;
    let price = best_level_price(ladder(slot.odds, direction))?;

    Some(build_intent(
        &bundle.event,
        bundle.first_market(),
        name,
        direction.label(),
        price,
    ))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    pub selected: Option<BetIntent>,
}

pub enum BoardAction {
    Select(BetIntent),
    Clear,
}

impl BoardState {
    pub fn is_selected(&self, event_id: &str, team: &str, direction: Direction) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|intent| intent.targets(event_id, team, direction))
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BoardAction::Select(intent) => Rc::new(BoardState {
                selected: Some(intent),
            }),
            BoardAction::Clear if self.selected.is_none() => self,
            BoardAction::Clear => Rc::new(BoardState::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, Market, Runner};

    fn bundle() -> EventBundle {
        EventBundle {
            event: Event {
                id: Some(Id::new("e1")),
                name: Some("Reds v Blues".into()),
                runners: vec![
                    Runner::new("r", "Reds"),
                    Runner::new("b", "Blues"),
                    Runner::new("d", "The Draw"),
                ],
                ..Default::default()
            },
            markets: vec![Market {
                market_id: Some(Id::new("m1")),
                in_play: Some(true),
                odds: vec![
                    RunnerOdds {
                        selection_id: Some(Id::new("r")),
                        back: vec![PriceLevel::at(1.8), PriceLevel::at(1.79)],
                        lay: vec![PriceLevel::at(1.82)],
                    },
                    RunnerOdds {
                        selection_id: Some(Id::new("b")),
                        back: vec![PriceLevel::at(4.2)],
                        lay: vec![],
                    },
                ],
            }],
        }
    }

    #[test]
    fn rows_render_three_slots() {
        let row = board_row(0, &bundle());

        assert!(row.live);
        assert_eq!(row.title, "Reds v Blues");
        let teams: Vec<_> = row.slots.iter().map(|s| s.team.as_deref()).collect();
        assert_eq!(teams, vec![Some("Reds"), Some("The Draw"), Some("Blues")]);
        assert_eq!(row.slots[0].back.text, "1.80");
        assert_eq!(row.slots[0].lay.text, "1.82");
        assert_eq!(row.slots[1].back.text, "-");
        assert!(!row.slots[1].lay.is_selectable());
        assert_eq!(row.slots[2].lay.text, "-");
    }

    #[test]
    fn unpriced_market_renders_unavailable() {
        let mut bundle = bundle();
        bundle.markets.clear();
        let row = board_row(3, &bundle);

        assert!(!row.is_available());
        assert!(!row.live);
        assert_eq!(row.index, 3);
    }

    #[test]
    fn selecting_a_price_builds_intent() {
        let intent = select(&bundle(), SlotPosition::Away, Direction::Back).unwrap();

        assert_eq!(intent.selected_team, "Blues");
        assert_eq!(intent.selection_id.as_deref(), Some("b"));
        assert_eq!(intent.side, "back");
        assert_eq!(intent.bet_type, "Back");
        assert_eq!(intent.odds, 4.2);
        assert_eq!(intent.market_id, "m1");
    }

    #[test]
    fn empty_cells_are_not_selectable() {
        assert_eq!(select(&bundle(), SlotPosition::Away, Direction::Lay), None);
        assert_eq!(select(&bundle(), SlotPosition::Draw, Direction::Back), None);
        assert_eq!(select(&EventBundle::default(), SlotPosition::Home, Direction::Back), None);
    }

    #[test]
    fn nameless_runner_cells_are_not_selectable() {
        let mut bundle = bundle();
        bundle.event.runners[0].name = None;

        let row = board_row(0, &bundle);
        assert_eq!(row.slots[0].team.as_deref(), Some("Unknown"));
        assert_eq!(row.slots[0].back.text, "1.80");
        assert!(!row.slots[0].back.is_selectable());
        assert!(!row.slots[0].lay.is_selectable());
        assert!(row.slots[2].back.is_selectable());

        assert_eq!(select(&bundle, SlotPosition::Home, Direction::Back), None);
        assert!(select(&bundle, SlotPosition::Away, Direction::Back).is_some());
    }

    #[test]
    fn state_holds_one_selection() {
        let first = select(&bundle(), SlotPosition::Home, Direction::Back).unwrap();
        let second = select(&bundle(), SlotPosition::Home, Direction::Lay).unwrap();

        let state = Rc::new(BoardState::default()).reduce(BoardAction::Select(first));
        assert!(state.is_selected("e1", "Reds", Direction::Back));

        let state = state.reduce(BoardAction::Select(second));
        assert!(!state.is_selected("e1", "Reds", Direction::Back));
        assert!(state.is_selected("e1", "Reds", Direction::Lay));

        let state = state.reduce(BoardAction::Clear);
        assert_eq!(*state, BoardState::default());
    }
}
