//! Average runs per game over time, with an optional team overlay.

use dioxus::prelude::*;

use super::axis::{axis_ticks, AxisTick, BottomAxis, LeftAxis, TickFormat, TICK_COUNT};
use super::tooltip::{use_tooltip, HoverHandlers, TooltipContent};
use crate::core::{
    aggregate::{aggregate_mean_by_year, AggregatedPoint, ValueField},
    config::ChartLayout,
    dataset::TeamSeasonRecord,
    format,
    scale::{extent, LinearScale},
};
use crate::t;

pub const LEAGUE_STROKE: &str = "#1f77b4";
pub const TEAM_STROKE: &str = "#d62728";
const LEAGUE_RADIUS: f64 = 3.0;
const TEAM_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesKind {
    LeagueAverage,
    Team(String),
}

impl SeriesKind {
    /// Stable element key; two series may share identical path data.
    pub fn key(&self) -> String {
        match self {
            Self::LeagueAverage => "league".to_string(),
            Self::Team(name) => format!("team-{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineMarker {
    pub cx: f64,
    pub cy: f64,
    pub point: AggregatedPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub kind: SeriesKind,
    /// SVG path data through every marker, left to right.
    pub path: String,
    pub markers: Vec<LineMarker>,
    pub stroke: &'static str,
    pub radius: f64,
}

impl LineSeries {
    pub fn values(&self) -> Vec<AggregatedPoint> {
        self.markers.iter().map(|m| m.point).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineScene {
    pub layout: ChartLayout,
    pub series: Vec<LineSeries>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl LineScene {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Aggregate `records` into the league-average series and, when `highlight`
/// names a team, a second series restricted to that team.
///
/// The horizontal domain is the plain extent of years across drawn series;
/// the vertical domain is their niced value extent. Series without points are
/// not drawn.
pub fn build_line_scene(
    records: &[TeamSeasonRecord],
    highlight: Option<&str>,
    layout: &ChartLayout,
) -> LineScene {
    let mut aggregated = vec![(
        SeriesKind::LeagueAverage,
        aggregate_mean_by_year(records, ValueField::RunsPerGame),
    )];
    if let Some(team) = highlight {
        let team_points = aggregate_mean_by_year(
            records.iter().filter(|r| r.name == team),
            ValueField::RunsPerGame,
        );
        aggregated.push((SeriesKind::Team(team.to_string()), team_points));
    }
    aggregated.retain(|(_, points)| !points.is_empty());

    let all_points = || aggregated.iter().flat_map(|(_, points)| points.iter());
    let x_extent = extent(all_points().map(|p| f64::from(p.year)));
    let y_extent = extent(all_points().map(|p| p.value));
    let (Some(x_domain), Some(y_domain)) = (x_extent, y_extent) else {
        return LineScene {
            layout: *layout,
            series: Vec::new(),
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
        };
    };

    let x = LinearScale::new(x_domain, (0.0, layout.inner_width()));
    let y = LinearScale::new(y_domain, (layout.inner_height(), 0.0)).nice(TICK_COUNT);

    let series = aggregated
        .into_iter()
        .map(|(kind, points)| {
            let markers: Vec<LineMarker> = points
                .into_iter()
                .map(|point| LineMarker {
                    cx: x.apply(f64::from(point.year)),
                    cy: y.apply(point.value),
                    point,
                })
                .collect();
            let (stroke, radius) = match &kind {
                SeriesKind::LeagueAverage => (LEAGUE_STROKE, LEAGUE_RADIUS),
                SeriesKind::Team(_) => (TEAM_STROKE, TEAM_RADIUS),
            };
            LineSeries {
                path: path_data(&markers),
                kind,
                markers,
                stroke,
                radius,
            }
        })
        .collect();

    LineScene {
        layout: *layout,
        series,
        x_ticks: axis_ticks(&x, TickFormat::Integer),
        y_ticks: axis_ticks(&y, TickFormat::Auto),
    }
}

fn path_data(markers: &[LineMarker]) -> String {
    let mut path = String::new();
    for (index, marker) in markers.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{command}{},{}", marker.cx, marker.cy));
    }
    path
}

pub fn line_tooltip(kind: &SeriesKind, point: &AggregatedPoint) -> TooltipContent {
    match kind {
        SeriesKind::LeagueAverage => TooltipContent::new(None)
            .row(t!("tooltip-year"), point.year.to_string())
            .row(t!("tooltip-avg-runs-per-game"), format::format_rpg(point.value)),
        SeriesKind::Team(team) => TooltipContent::new(Some(team.clone()))
            .row(t!("tooltip-year"), point.year.to_string())
            .row(t!("tooltip-runs-per-game"), format::format_rpg(point.value)),
    }
}

fn legend_label(kind: &SeriesKind) -> String {
    match kind {
        SeriesKind::LeagueAverage => t!("legend-league-average"),
        SeriesKind::Team(team) => team.clone(),
    }
}

#[component]
pub fn LineChart(
    records: Vec<TeamSeasonRecord>,
    highlight: Option<String>,
    layout: ChartLayout,
) -> Element {
    let hover = HoverHandlers::new(use_tooltip());
    let scene = build_line_scene(&records, highlight.as_deref(), &layout);

    rsx! {
        figure { class: "chart chart-line",
            figcaption { class: "chart__title", {t!("line-title")} }
            svg {
                id: "linechart",
                class: "chart__surface",
                view_box: "{layout.view_box()}",
                g { transform: "{layout.plot_transform()}",
                    if !scene.is_empty() {
                        BottomAxis {
                            ticks: scene.x_ticks.clone(),
                            width: layout.inner_width(),
                            y: layout.inner_height(),
                            title: t!("axis-year"),
                        }
                        LeftAxis {
                            ticks: scene.y_ticks.clone(),
                            height: layout.inner_height(),
                            title: t!("axis-avg-runs-per-game"),
                        }
                        for series in scene.series.iter() {
                            g { key: "{series.kind.key()}", class: "chart-line__series",
                                path {
                                    class: "chart-line__path",
                                    d: "{series.path}",
                                    fill: "none",
                                    stroke: "{series.stroke}",
                                    stroke_width: "2",
                                }
                                for marker in series.markers.iter() {
                                    circle {
                                        key: "{marker.point.year}",
                                        class: "chart-line__point",
                                        cx: "{marker.cx}",
                                        cy: "{marker.cy}",
                                        r: "{series.radius}",
                                        fill: "{series.stroke}",
                                        onmouseenter: {
                                            let content = line_tooltip(&series.kind, &marker.point);
                                            move |evt| hover.enter(content.clone(), &evt)
                                        },
                                        onmousemove: move |evt| hover.moved(&evt),
                                        onmouseleave: move |_| hover.leave(),
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if scene.is_empty() {
                p { class: "chart__placeholder", {t!("chart-empty")} }
            } else {
                ul { class: "chart-legend",
                    for series in scene.series.iter() {
                        li { key: "{series.kind.key()}", class: "chart-legend__item",
                            span { class: "chart-legend__swatch", style: "background: {series.stroke};" }
                            span { class: "chart-legend__label", "{legend_label(&series.kind)}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn records() -> Vec<TeamSeasonRecord> {
        vec![
            TeamSeasonRecord::new(1960, "AL", "BOS", "Red Sox", 10, 40, 5),
            TeamSeasonRecord::new(1960, "NL", "CHN", "Cubs", 10, 20, 3),
            TeamSeasonRecord::new(1961, "AL", "BOS", "Red Sox", 10, 50, 7),
        ]
    }

    #[test]
    fn league_average_series_without_highlight() {
        let scene = build_line_scene(&records(), None, &ChartLayout::default());
        assert_eq!(scene.series.len(), 1);

        let league = &scene.series[0];
        assert_eq!(league.kind, SeriesKind::LeagueAverage);
        assert_eq!(
            league.values(),
            vec![
                AggregatedPoint { year: 1960, value: 3.0 },
                AggregatedPoint { year: 1961, value: 5.0 },
            ]
        );
        assert!(league.path.starts_with('M'));
        assert_eq!(league.path.matches('L').count(), 1);
    }

    #[test]
    fn highlighted_team_adds_second_series() {
        let scene = build_line_scene(&records(), Some("Red Sox"), &ChartLayout::default());
        assert_eq!(scene.series.len(), 2);

        let team = &scene.series[1];
        assert_eq!(team.kind, SeriesKind::Team("Red Sox".into()));
        assert_eq!(team.stroke, TEAM_STROKE);
        assert_eq!(
            team.values(),
            vec![
                AggregatedPoint { year: 1960, value: 4.0 },
                AggregatedPoint { year: 1961, value: 5.0 },
            ]
        );
    }

    #[test]
    fn year_axis_spans_plain_extent() {
        let layout = ChartLayout::default();
        let scene = build_line_scene(&records(), None, &layout);
        let markers = &scene.series[0].markers;
        assert_relative_eq!(markers[0].cx, 0.0);
        assert_relative_eq!(markers[1].cx, layout.inner_width());
        assert!(scene.x_ticks.iter().all(|t| !t.label.contains('.')));
    }

    #[test]
    fn value_axis_spans_both_series() {
        let records = vec![
            TeamSeasonRecord::new(1960, "AL", "BOS", "Red Sox", 10, 45, 5),
            TeamSeasonRecord::new(1960, "NL", "CHN", "Cubs", 10, 25, 3),
        ];
        let layout = ChartLayout::default();
        let scene = build_line_scene(&records, Some("Red Sox"), &layout);

        // League mean 3.5 sits on the floor, the team's 4.5 on the ceiling.
        assert_relative_eq!(scene.series[0].markers[0].cy, layout.inner_height());
        assert_relative_eq!(scene.series[1].markers[0].cy, 0.0);
    }

    #[test]
    fn single_year_yields_single_point() {
        let records: Vec<_> = records().into_iter().filter(|r| r.year == 1960).collect();
        let scene = build_line_scene(&records, None, &ChartLayout::default());
        assert_eq!(scene.series[0].markers.len(), 1);
        assert!(!scene.series[0].path.contains('L'));
    }

    #[test]
    fn team_without_records_draws_only_league_series() {
        let scene = build_line_scene(&records(), Some("Mets"), &ChartLayout::default());
        assert_eq!(scene.series.len(), 1);
        assert_eq!(scene.series[0].kind, SeriesKind::LeagueAverage);
    }

    #[test]
    fn empty_records_draw_nothing() {
        let scene = build_line_scene(&[], Some("Red Sox"), &ChartLayout::default());
        assert!(scene.is_empty());
        assert!(scene.x_ticks.is_empty());
    }

    #[test]
    fn same_inputs_same_scene() {
        let layout = ChartLayout::default();
        assert_eq!(
            build_line_scene(&records(), Some("Cubs"), &layout),
            build_line_scene(&records(), Some("Cubs"), &layout)
        );
    }

    #[test]
    fn tooltips_differ_by_series() {
        crate::i18n::init();
        let point = AggregatedPoint { year: 1961, value: 4.456 };

        let league = line_tooltip(&SeriesKind::LeagueAverage, &point);
        assert!(league.title.is_none());
        let values: Vec<_> = league.rows.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(values, vec!["1961", "4.46"]);

        let team = line_tooltip(&SeriesKind::Team("Cubs".into()), &point);
        assert_eq!(team.title.as_deref(), Some("Cubs"));
        assert_eq!(team.rows.len(), 2);
    }

    #[test]
    fn lone_team_series_keys_apart_from_league() {
        let records = vec![
            TeamSeasonRecord::new(1960, "NL", "CHN", "Cubs", 10, 20, 3),
            TeamSeasonRecord::new(1961, "NL", "CHN", "Cubs", 10, 30, 4),
        ];
        let scene = build_line_scene(&records, Some("Cubs"), &ChartLayout::default());
        assert_eq!(scene.series[0].path, scene.series[1].path);
        assert_ne!(scene.series[0].kind.key(), scene.series[1].kind.key());
    }

    #[test]
    fn highlighting_the_only_team_rerenders() {
        fn app() -> Element {
            crate::charts::provide_tooltip();
            let records = vec![
                TeamSeasonRecord::new(1960, "NL", "CHN", "Cubs", 10, 20, 3),
                TeamSeasonRecord::new(1961, "NL", "CHN", "Cubs", 10, 30, 4),
            ];
            // Alternates between plain and highlighted renders.
            let highlight = (generation() % 2 == 1).then(|| "Cubs".to_string());
            rsx! {
                LineChart { records, highlight, layout: ChartLayout::default() }
            }
        }

        crate::i18n::init();
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        for _ in 0..2 {
            dom.mark_dirty(ScopeId::APP);
            dom.render_immediate_to_vec();
        }
    }
}
