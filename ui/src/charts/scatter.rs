//! Runs-per-game vs wins scatter plot.

use dioxus::prelude::*;

use super::axis::{axis_ticks, AxisTick, BottomAxis, LeftAxis, TickFormat, TICK_COUNT};
use super::tooltip::{use_tooltip, HoverHandlers, TooltipContent};
use crate::core::{
    config::ChartLayout,
    dataset::TeamSeasonRecord,
    format,
    palette::ColorAssignment,
    scale::{extent, LinearScale},
};
use crate::t;

pub const BASE_RADIUS: f64 = 4.0;
pub const HIGHLIGHT_RADIUS: f64 = 7.0;
pub const HIGHLIGHT_STROKE: &str = "#1b1f27";
const POINT_OPACITY: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: &'static str,
    pub highlighted: bool,
    pub record: TeamSeasonRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LegendSwatch {
    League(&'static str),
    HighlightedTeam,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: LegendSwatch,
}

/// Everything the scatter plot draws for one set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterScene {
    pub layout: ChartLayout,
    pub points: Vec<ScatterPoint>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub legend: Vec<LegendEntry>,
}

impl ScatterScene {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lay out `records` as points of (runs per game, wins).
///
/// Axis domains are the niced extents of the given records. Points for
/// `highlight` are drawn last, larger and outlined. The legend lists every
/// league in `colors`, not only the visible ones.
pub fn build_scatter_scene(
    records: &[TeamSeasonRecord],
    colors: &ColorAssignment,
    highlight: Option<&str>,
    layout: &ChartLayout,
) -> ScatterScene {
    let mut legend: Vec<LegendEntry> = colors
        .entries()
        .map(|(league, color)| LegendEntry {
            label: league.to_string(),
            swatch: LegendSwatch::League(color),
        })
        .collect();
    if let Some(team) = highlight {
        legend.push(LegendEntry {
            label: team.to_string(),
            swatch: LegendSwatch::HighlightedTeam,
        });
    }

    let x_extent = extent(records.iter().map(|r| r.runs_per_game));
    let y_extent = extent(records.iter().map(|r| f64::from(r.wins)));
    let (Some(x_domain), Some(y_domain)) = (x_extent, y_extent) else {
        return ScatterScene {
            layout: *layout,
            points: Vec::new(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            legend,
        };
    };

    let x = LinearScale::new(x_domain, (0.0, layout.inner_width())).nice(TICK_COUNT);
    let y = LinearScale::new(y_domain, (layout.inner_height(), 0.0)).nice(TICK_COUNT);

    let (mut points, highlighted): (Vec<_>, Vec<_>) = records
        .iter()
        .map(|record| {
            let is_highlighted = highlight.is_some_and(|team| team == record.name);
            ScatterPoint {
                cx: x.apply(record.runs_per_game),
                cy: y.apply(f64::from(record.wins)),
                radius: if is_highlighted {
                    HIGHLIGHT_RADIUS
                } else {
                    BASE_RADIUS
                },
                fill: colors.color_for(&record.league),
                highlighted: is_highlighted,
                record: record.clone(),
            }
        })
        .partition(|point| !point.highlighted);
    points.extend(highlighted);

    ScatterScene {
        layout: *layout,
        points,
        x_ticks: axis_ticks(&x, TickFormat::Auto),
        y_ticks: axis_ticks(&y, TickFormat::Auto),
        legend,
    }
}

pub fn scatter_tooltip(record: &TeamSeasonRecord) -> TooltipContent {
    TooltipContent::new(Some(record.name.clone()))
        .row(t!("tooltip-year"), record.year.to_string())
        .row(t!("tooltip-league"), record.league.clone())
        .row(t!("tooltip-wins"), record.wins.to_string())
        .row(t!("tooltip-runs-per-game"), format::format_rpg(record.runs_per_game))
}

#[component]
pub fn ScatterPlot(
    records: Vec<TeamSeasonRecord>,
    colors: ColorAssignment,
    highlight: Option<String>,
    layout: ChartLayout,
) -> Element {
    let hover = HoverHandlers::new(use_tooltip());
    let scene = build_scatter_scene(&records, &colors, highlight.as_deref(), &layout);

    rsx! {
        figure { class: "chart chart-scatter",
            figcaption { class: "chart__title", {t!("scatter-title")} }
            svg {
                id: "scatterplot",
                class: "chart__surface",
                view_box: "{layout.view_box()}",
                g { transform: "{layout.plot_transform()}",
                    if !scene.is_empty() {
                        BottomAxis {
                            ticks: scene.x_ticks.clone(),
                            width: layout.inner_width(),
                            y: layout.inner_height(),
                            title: t!("axis-runs-per-game"),
                        }
                        LeftAxis {
                            ticks: scene.y_ticks.clone(),
                            height: layout.inner_height(),
                            title: t!("axis-wins"),
                        }
                        for (index, point) in scene.points.iter().enumerate() {
                            circle {
                                key: "{index}",
                                class: if point.highlighted { "chart-scatter__point chart-scatter__point--highlight" } else { "chart-scatter__point" },
                                cx: "{point.cx}",
                                cy: "{point.cy}",
                                r: "{point.radius}",
                                fill: "{point.fill}",
                                opacity: "{POINT_OPACITY}",
                                stroke: if point.highlighted { HIGHLIGHT_STROKE } else { "none" },
                                stroke_width: if point.highlighted { "2" } else { "0" },
                                onmouseenter: {
                                    let content = scatter_tooltip(&point.record);
                                    move |evt| hover.enter(content.clone(), &evt)
                                },
                                onmousemove: move |evt| hover.moved(&evt),
                                onmouseleave: move |_| hover.leave(),
                            }
                        }
                    }
                }
            }
            if scene.is_empty() {
                p { class: "chart__placeholder", {t!("chart-empty")} }
            }
            ul { class: "chart-legend",
                for entry in scene.legend.iter() {
                    li { key: "{entry.label}", class: "chart-legend__item",
                        match &entry.swatch {
                            LegendSwatch::League(color) => rsx! {
                                span { class: "chart-legend__swatch", style: "background: {color};" }
                            },
                            LegendSwatch::HighlightedTeam => rsx! {
                                span { class: "chart-legend__swatch chart-legend__swatch--highlight" }
                            },
                        }
                        span { class: "chart-legend__label", "{entry.label}" }
                    }
                }
            }
        }
    }
}
