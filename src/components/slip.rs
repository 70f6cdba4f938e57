use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::error::SlipError;
use crate::intent::{BetIntent, Direction};
use crate::odds_format::OddsFormat;
use crate::slip::{finalize, liability, parse_stake, potential_profit};

#[derive(Properties, PartialEq)]
pub struct BetSlipProps {
    pub intent: Option<BetIntent>,
    pub on_close: Callback<()>,
    pub on_place: Callback<BetIntent>,
}

#[function_component(BetSlip)]
pub fn bet_slip(props: &BetSlipProps) -> Html {
    let stake_input = use_state(String::new);
    let odds_format = use_state(|| OddsFormat::Decimal);
    let error = use_state(|| None::<SlipError>);

    // A new selection starts with a blank stake.
    {
        let stake_input = stake_input.clone();
        let error = error.clone();
        use_effect_with(props.intent.clone(), move |_| {
            stake_input.set(String::new());
            error.set(None);
            || ()
        });
    }

    let Some(intent) = props.intent.as_ref() else {
        return html! {
            <div class="card bet-slip">
                <h2><span>{"Bet Slip"}</span></h2>
                <div class="hint">{"Click a price to add a selection."}</div>
            </div>
        };
    };

    let stake = parse_stake(&stake_input);
    let direction = intent.direction().unwrap_or(Direction::Back);

    let on_stake_input = {
        let stake_input = stake_input.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            stake_input.set(target.value());
            error.set(None);
        })
    };
    let on_format_change = {
        let odds_format = odds_format.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            odds_format.set(OddsFormat::from_index(target.selected_index()));
        })
    };
    let on_place = {
        let intent = intent.clone();
        let error = error.clone();
        let on_place = props.on_place.clone();
        Callback::from(move |_: MouseEvent| match finalize(&intent, stake) {
            Ok(ticket) => on_place.emit(ticket),
            Err(err) => error.set(Some(err)),
        })
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    let (outcome_label, outcome) = match direction {
        Direction::Back => ("Potential profit", potential_profit(direction, stake, intent.odds)),
        Direction::Lay => ("Liability", liability(direction, stake, intent.odds)),
    };

    html! {
        <div class="card bet-slip">
            <h2>
                <span>{"Bet Slip"}</span>
                <span class={classes!("status-indicator", intent.side.clone())}>{ &intent.bet_type }</span>
            </h2>
            <div class="muted">{ format!("{} · {}", intent.sport_name, intent.competition_name) }</div>
            <div><strong>{ &intent.selected_team }</strong></div>
            <div class="hint">{ format!("{} v {} ({})", intent.home_team, intent.away_team, intent.event_name) }</div>

            <div class="section-divider"></div>

            <div class="input-group">
                <label>{"Odds"}</label>
                <div class="row">
                    <select onchange={on_format_change} aria-label="Odds format selection">
                        { for OddsFormat::all().iter().map(|(f, name)| {
                            let selected = *f == *odds_format;
                            html!{ <option {selected}>{ *name }</option> }
                        })}
                    </select>
                    <div class="result">{ odds_format.render(intent.odds) }</div>
                </div>
            </div>

            <div class="input-group">
                <label>{"Stake"}</label>
                <input
                    type="text"
                    placeholder={"e.g. 25"}
                    value={(*stake_input).clone()}
                    oninput={on_stake_input}
                    aria-label="Stake amount" />
            </div>

            <div class="metric-item">
                <div class="metric-value">{ format!("{:.2}", outcome) }</div>
                <div class="metric-label">{ outcome_label }</div>
            </div>

            { if let Some(err) = (*error).as_ref() {
                html!{ <div class="hint danger">{ err.to_string() }</div> }
            } else { html!{} }}

            <div class="row">
                <button onclick={on_place} aria-label="Place bet">{"Place Bet"}</button>
                <button onclick={on_close} class="danger" aria-label="Close bet slip">{"Close"}</button>
            </div>
        </div>
    }
}
