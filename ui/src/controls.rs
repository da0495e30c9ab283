//! Form controls that feed filter changes back to the dashboard.

use dioxus::prelude::*;

use crate::core::filters::{Selection, YearRange};
use crate::t;

/// Twin range sliders for one chart's season window.
///
/// Element ids are `{id_prefix}YearMin`, `{id_prefix}YearMax` and
/// `{id_prefix}YearLabel`.
#[component]
pub fn YearRangeControl(
    id_prefix: String,
    label: String,
    bounds: YearRange,
    value: YearRange,
    on_change: EventHandler<YearRange>,
) -> Element {
    let min_id = format!("{id_prefix}YearMin");
    let max_id = format!("{id_prefix}YearMax");
    let label_id = format!("{id_prefix}YearLabel");

    rsx! {
        fieldset { class: "control control-years",
            legend { class: "control__legend", "{label}" }
            input {
                r#type: "range",
                id: "{min_id}",
                class: "control-years__slider",
                min: "{bounds.min}",
                max: "{bounds.max}",
                value: "{value.min}",
                oninput: move |evt: FormEvent| {
                    if let Ok(year) = evt.value().parse::<i32>() {
                        on_change.call(value.with_min(year));
                    }
                },
            }
            input {
                r#type: "range",
                id: "{max_id}",
                class: "control-years__slider",
                min: "{bounds.min}",
                max: "{bounds.max}",
                value: "{value.max}",
                oninput: move |evt: FormEvent| {
                    if let Ok(year) = evt.value().parse::<i32>() {
                        on_change.call(value.with_max(year));
                    }
                },
            }
            span { id: "{label_id}", class: "control-years__label", "{value.label()}" }
        }
    }
}

#[component]
pub fn LeagueFilter(
    leagues: Vec<String>,
    selected: Selection,
    on_change: EventHandler<Selection>,
) -> Element {
    rsx! {
        label { class: "control control-select",
            span { class: "control__legend", {t!("control-league")} }
            select {
                id: "leagueFilter",
                value: "{selected.option_value()}",
                oninput: move |evt: FormEvent| {
                    on_change.call(Selection::from_option_value(&evt.value()))
                },
                option { value: Selection::ALL_VALUE, {t!("control-all")} }
                for league in leagues.iter() {
                    option {
                        key: "{league}",
                        value: "{league}",
                        selected: selected.as_only() == Some(league.as_str()),
                        if league.is_empty() {
                            {t!("control-blank-league")}
                        } else {
                            "{league}"
                        }
                    }
                }
            }
        }
    }
}

/// Team dropdown. `teams` is rebuilt by the controller on every league change.
#[component]
pub fn TeamFilter(
    teams: Vec<String>,
    selected: Selection,
    on_change: EventHandler<Selection>,
) -> Element {
    rsx! {
        label { class: "control control-select",
            span { class: "control__legend", {t!("control-team")} }
            select {
                id: "teamFilter",
                value: "{selected.option_value()}",
                oninput: move |evt: FormEvent| {
                    on_change.call(Selection::from_option_value(&evt.value()))
                },
                option { value: Selection::ALL_VALUE, {t!("control-all")} }
                for team in teams.iter() {
                    option {
                        key: "{team}",
                        value: "{team}",
                        selected: selected.as_only() == Some(team.as_str()),
                        "{team}"
                    }
                }
            }
        }
    }
}
