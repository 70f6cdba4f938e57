use std::rc::Rc;

use gloo::console;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew::TargetCast;

use super::{BetSlip, OddsBoard};
use crate::config::BoardConfig;
use crate::feed::Feed;
use crate::intent::BetIntent;

const DEMO_FEED: &str = include_str!("../../demos/feed.json");

fn load_config() -> BoardConfig {
    BoardConfig::bundled().unwrap_or_else(|err| {
        console::error!(format!("board config rejected, using defaults: {err}"));
        BoardConfig::default()
    })
}

fn load_feed(json: &str) -> Feed {
    match Feed::from_json(json) {
        Ok((feed, report)) => {
            if report.duplicates_dropped > 0 {
                console::warn!(format!(
                    "dropped {} duplicate odds entries across {} events",
                    report.duplicates_dropped, report.events
                ));
            }
            feed
        }
        Err(err) => {
            console::error!(err.to_string());
            Feed::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let feed = use_memo((), |_| load_feed(DEMO_FEED));
    let sport = {
        let config = config.clone();
        let feed = feed.clone();
        use_state(move || config.initial_sport(feed.sports()))
    };
    // Parent-side copy of the board's selection, consumed by the slip.
    let intent = use_state(|| None::<BetIntent>);
    let reset = use_state(|| 0u32);

    let sports: Vec<String> = feed.sports().map(str::to_string).collect();
    let events = use_memo(((*sport).clone(), feed.clone()), |(sport, feed)| {
        Rc::new(
            sport
                .as_deref()
                .map(|sport| feed.events(sport).to_vec())
                .unwrap_or_default(),
        )
    });

    let on_sport_change = {
        let sport = sport.clone();
        let sports = sports.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let idx = usize::try_from(target.selected_index()).ok();
            sport.set(idx.and_then(|idx| sports.get(idx).cloned()));
        })
    };
    let on_select = {
        let intent = intent.clone();
        Callback::from(move |selected: BetIntent| intent.set(Some(selected)))
    };
    let clear = {
        let intent = intent.clone();
        let reset = reset.clone();
        move || {
            intent.set(None);
            reset.set(reset.wrapping_add(1));
        }
    };
    let on_close = {
        let clear = clear.clone();
        Callback::from(move |_: ()| clear())
    };
    let on_place = {
        let verbose = config.verbose;
        Callback::from(move |ticket: BetIntent| {
            // Placement itself belongs to the betting service; the shell hands
            // the ticket over and resets the selection.
            match serde_json::to_string(&ticket) {
                Ok(json) if verbose => {
                    console::log!(format!("bet ticket {json}"));
                }
                Ok(_) => {}
                Err(err) => {
                    console::error!(format!("failed to encode bet ticket: {err}"));
                }
            }
            clear();
        })
    };

    html! {
        <div class="container">
            <header>
                <h1>{ &config.title }</h1>
                <select onchange={on_sport_change} aria-label="Sport selection">
                    { for sports.iter().map(|name| {
                        let selected = sport.as_deref() == Some(name.as_str());
                        html!{ <option {selected}>{ name }</option> }
                    })}
                </select>
            </header>

            <div class="grid">
                <OddsBoard
                    events={(*events).clone()}
                    {on_select}
                    reset={*reset}
                    loading_text={config.loading_text.clone()}
                    verbose={config.verbose} />
                <BetSlip intent={(*intent).clone()} {on_close} {on_place} />
            </div>
        </div>
    }
}
