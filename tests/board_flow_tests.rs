use std::rc::Rc;

use oddsboard::arrange::{arrange, SlotPosition};
use oddsboard::board::{board_rows, select, BoardAction, BoardState};
use oddsboard::model::{Event, EventBundle, Id, Market, PriceLevel, Runner, RunnerOdds};
use oddsboard::slip::finalize;
use oddsboard::{Direction, Feed, SlipError};
use yew::Reducible;

fn odds(id: &str, back: f64, lay: f64) -> RunnerOdds {
    RunnerOdds {
        selection_id: Some(Id::new(id)),
        back: vec![PriceLevel::at(back)],
        lay: vec![PriceLevel::at(lay)],
    }
}

fn team_x_v_team_y() -> EventBundle {
    EventBundle {
        event: Event {
            id: Some(Id::new("ev-xy")),
            name: Some("Team X v Team Y".into()),
            sport_name: Some("Soccer".into()),
            competition_name: Some("League".into()),
            live: Some(true),
            runners: vec![
                Runner::new("x", "Team X"),
                Runner::new("d", "The Draw"),
                Runner::new("y", "Team Y"),
            ],
        },
        markets: vec![Market {
            market_id: Some(Id::new("1.1")),
            in_play: Some(true),
            odds: vec![odds("x", 2.10, 2.20), odds("y", 3.00, 3.10)],
        }],
    }
}

#[test]
fn team_x_back_click_produces_intent() {
    let bundle = team_x_v_team_y();

    let slots = arrange(&bundle.event.runners, &bundle.markets[0].odds);
    let order: Vec<_> = slots
        .iter()
        .map(|slot| slot.runner.map(Runner::display_name))
        .collect();
    assert_eq!(order, vec![Some("Team X"), Some("The Draw"), Some("Team Y")]);

    let rows = board_rows(std::slice::from_ref(&bundle));
    let draw = &rows[0].slots[1];
    assert_eq!((draw.back.text.as_str(), draw.lay.text.as_str()), ("-", "-"));
    assert_eq!(rows[0].slots[0].back.text, "2.10");
    assert!(rows[0].live);

    let intent = select(&bundle, SlotPosition::Home, Direction::Back).unwrap();
    assert_eq!(intent.selected_team, "Team X");
    assert_eq!(intent.side, "back");
    assert_eq!(intent.odds, 2.10);
    assert_eq!(format!("{:.2}", intent.odds), "2.10");
    assert_eq!(intent.home_team, "Team X");
    assert_eq!(intent.away_team, "Team Y");
    assert_eq!(intent.selection_id.as_deref(), Some("x"));
    assert_eq!(intent.stake, 0.0);
    assert_eq!(intent.category, "match odds");
}

#[test]
fn new_selection_replaces_previous_and_slip_finalizes() {
    let bundle = team_x_v_team_y();
    let back_x = select(&bundle, SlotPosition::Home, Direction::Back).unwrap();
    let lay_y = select(&bundle, SlotPosition::Away, Direction::Lay).unwrap();

    let state = Rc::new(BoardState::default())
        .reduce(BoardAction::Select(back_x))
        .reduce(BoardAction::Select(lay_y.clone()));
    assert_eq!(state.selected.as_ref(), Some(&lay_y));

    assert_eq!(finalize(&lay_y, 0.0), Err(SlipError::NonPositiveStake));
    let ticket = finalize(&lay_y, 20.0).unwrap();
    assert_eq!(ticket.stake, 20.0);
    assert_eq!(ticket.odds, 3.10);
    assert_eq!(ticket.bet_type, "Lay");
}

#[test]
fn demo_feed_renders_every_sport() {
    let json = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/feed.json"))
        .expect("read demo feed");
    let (feed, report) = Feed::from_json(&json).unwrap();
    assert_eq!(report.events, 4);

    let soccer = board_rows(feed.events("soccer"));
    assert_eq!(soccer.len(), 2);
    assert_eq!(soccer[1].slots[0].back.text, "1.96");
    assert_eq!(soccer[1].slots[1].team.as_deref(), Some("The Draw"));
    assert_eq!(soccer[1].slots[1].back.text, "3.55");
    assert_eq!(soccer[1].slots[2].team.as_deref(), Some("Northfield"));
    assert!(!soccer[1].live);

    let tennis = board_rows(feed.events("tennis"));
    assert!(tennis[0].slots[1].is_placeholder());
    assert_eq!(tennis[0].event_id, "30113001");

    let cricket = board_rows(feed.events("cricket"));
    assert!(!cricket[0].is_available());
}
