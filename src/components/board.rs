use std::rc::Rc;

use gloo::console;
use yew::prelude::*;

use crate::arrange::SlotPosition;
use crate::board::{board_rows, select, BoardAction, BoardRow, BoardState, Cell, SlotView};
use crate::intent::BetIntent;
use crate::model::EventBundle;

#[derive(Properties, PartialEq)]
pub struct OddsBoardProps {
    pub events: Rc<Vec<EventBundle>>,
    pub on_select: Callback<BetIntent>,
    // bumped by the parent when its slip closes
    #[prop_or_default]
    pub reset: u32,
    #[prop_or(AttrValue::from("Loading..."))]
    pub loading_text: AttrValue,
    #[prop_or_default]
    pub verbose: bool,
}

#[function_component(OddsBoard)]
pub fn odds_board(props: &OddsBoardProps) -> Html {
    let state = use_reducer(BoardState::default);
    let rows = use_memo(props.events.clone(), |events| board_rows(events));

    {
        let dispatcher = state.dispatcher();
        use_effect_with(props.reset, move |_| {
            dispatcher.dispatch(BoardAction::Clear);
            || ()
        });
    }
    use_effect_with(rows.clone(), |rows| {
        for row in rows.iter().filter(|row| row.surplus_runners > 0) {
            console::warn!(format!(
                "{}: {} runner(s) beyond home/away not shown",
                row.title, row.surplus_runners
            ));
        }
        || ()
    });

    if rows.is_empty() {
        return html! {
            <div class="card odds-board">
                <div class="hint loading">{ props.loading_text.clone() }</div>
            </div>
        };
    }

    let on_cell = {
        let events = props.events.clone();
        let on_select = props.on_select.clone();
        let dispatcher = state.dispatcher();
        let verbose = props.verbose;
        Callback::from(move |(index, position, cell): (usize, SlotPosition, Cell)| {
            let Some(intent) = events
                .get(index)
                .and_then(|bundle| select(bundle, position, cell.direction))
            else {
                return;
            };
            if verbose {
                console::log!(format!(
                    "selected {} {} @ {:.2} ({})",
                    intent.bet_type, intent.selected_team, intent.odds, intent.event_name
                ));
            }
            dispatcher.dispatch(BoardAction::Select(intent.clone()));
            on_select.emit(intent);
        })
    };

    html! {
        <div class="card odds-board">
            <div class="board-head">
                <span>{"Event"}</span>
                <span>{"1"}</span>
                <span>{"X"}</span>
                <span>{"2"}</span>
            </div>
            { for rows.iter().map(|row| view_row(row, &state, &on_cell)) }
        </div>
    }
}

fn view_row(
    row: &BoardRow,
    state: &BoardState,
    on_cell: &Callback<(usize, SlotPosition, Cell)>,
) -> Html {
    html! {
        <div class="board-row" key={row.index}>
            <div class="event-info">
                <strong>{ &row.title }</strong>
                { if row.live {
                    html!{ <span class="status-indicator success live">{"LIVE"}</span> }
                } else { html!{} }}
                <div class="muted">{ &row.competition }</div>
            </div>
            { if row.is_available() {
                html!{ <>{ for row.slots.iter().map(|slot| view_slot(row, slot, state, on_cell)) }</> }
            } else {
                html!{ <div class="hint unavailable">{"Market unavailable"}</div> }
            }}
        </div>
    }
}

fn view_slot(
    row: &BoardRow,
    slot: &SlotView,
    state: &BoardState,
    on_cell: &Callback<(usize, SlotPosition, Cell)>,
) -> Html {
    let Some(team) = slot.team.as_deref() else {
        return html! { <div class="slot placeholder"></div> };
    };

    html! {
        <div class="slot">
            <div class="slot-team">{ team }</div>
            <div class="row">
                { for slot.cells().into_iter().map(|cell| {
                    let selected = state.is_selected(&row.event_id, team, cell.direction);
                    let class = classes!(
                        "price",
                        cell.direction.label().to_lowercase(),
                        selected.then_some("selected"),
                    );
                    let onclick = {
                        let on_cell = on_cell.clone();
                        let payload = (row.index, slot.position, cell.clone());
                        Callback::from(move |_: MouseEvent| on_cell.emit(payload.clone()))
                    };
                    html!{
                        <button
                            {class}
                            {onclick}
                            disabled={!cell.is_selectable()}
                            aria-label={format!("{} {} at {}", cell.direction, team, cell.text)}>
                            { &cell.text }
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
