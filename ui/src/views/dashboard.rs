use dioxus::prelude::*;
use tracing::error;

use crate::charts::{provide_tooltip, LineChart, ScatterPlot, Tooltip};
use crate::controls::{LeagueFilter, TeamFilter, YearRangeControl};
use crate::core::{
    config::DashboardConfig,
    controller::DashboardController,
    dataset::{self, Dataset, TeamSeasonRecord},
    filters::{Selection, YearRange},
};
use crate::t;

/// Loads the dataset once, then hands it to the interactive panels.
///
/// Nothing else is initialized until the load resolves. A failed load
/// replaces the dashboard with an error banner for the rest of the session.
#[component]
pub fn Dashboard() -> Element {
    // Reactive dependency on the global language code, if the platform provides one.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    provide_tooltip();

    let dataset_config = config.dataset.clone();
    let loaded = use_resource(move || {
        let dataset_config = dataset_config.clone();
        async move {
            let result = dataset::load(&dataset_config).await;
            if let Err(err) = &result {
                error!(%err, source = %dataset_config.source, "dataset load failed");
            }
            result
        }
    });

    let body = match &*loaded.read() {
        None => rsx! {
            p { class: "dashboard__status", {t!("dashboard-loading")} }
        },
        Some(Err(err)) => rsx! {
            div { class: "dashboard__error", role: "alert",
                {t!("dashboard-load-error", error = err.to_string())}
            }
        },
        Some(Ok(data)) => rsx! {
            DashboardPanels { dataset: data.clone(), config: config.clone() }
        },
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { {t!("dashboard-intro")} }
            {body}
        }
        Tooltip {}
    }
}

#[component]
fn DashboardPanels(dataset: Dataset, config: DashboardConfig) -> Element {
    let min_year = config.dataset.min_year;
    let mut controller = use_signal(move || DashboardController::new(dataset.clone(), min_year));

    let state = controller.read();
    let bounds = state.year_bounds();
    let filters = state.filters().clone();
    let colors = state.colors().clone();
    let leagues = state.leagues().to_vec();
    let teams = state.team_options().to_vec();
    let highlight = state.highlight_team().map(str::to_string);
    let scatter_records: Vec<TeamSeasonRecord> =
        state.scatter_records().into_iter().cloned().collect();
    let line_records: Vec<TeamSeasonRecord> = state.line_records().into_iter().cloned().collect();
    drop(state);

    let layout = config.layout;

    rsx! {
        div { class: "dashboard__filters",
            LeagueFilter {
                leagues,
                selected: filters.league.clone(),
                on_change: move |league: Selection| controller.write().set_league(league),
            }
            TeamFilter {
                teams,
                selected: filters.team.clone(),
                on_change: move |team: Selection| {
                    controller.write().set_team(team);
                },
            }
        }

        div { class: "dashboard__panels",
            section { class: "dashboard__panel",
                YearRangeControl {
                    id_prefix: "scatter".to_string(),
                    label: t!("control-scatter-years"),
                    bounds,
                    value: filters.scatter_years,
                    on_change: move |range: YearRange| {
                        controller.write().set_scatter_year_range(range.min, range.max);
                    },
                }
                ScatterPlot {
                    records: scatter_records,
                    colors,
                    highlight: highlight.clone(),
                    layout,
                }
            }
            section { class: "dashboard__panel",
                YearRangeControl {
                    id_prefix: "line".to_string(),
                    label: t!("control-line-years"),
                    bounds,
                    value: filters.line_years,
                    on_change: move |range: YearRange| {
                        controller.write().set_line_year_range(range.min, range.max);
                    },
                }
                LineChart {
                    records: line_records,
                    highlight,
                    layout,
                }
            }
        }
    }
}
