use dioxus::prelude::*;

use crate::core::{format, scale::LinearScale};

/// Ticks requested from each scale; the scale picks round values near this count.
pub const TICK_COUNT: usize = 10;
const TICK_SIZE: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    /// Precision follows the tick step.
    Auto,
    /// Whole numbers only (years).
    Integer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel offset along the axis.
    pub offset: f64,
    pub label: String,
}

pub fn axis_ticks(scale: &LinearScale, format: TickFormat) -> Vec<AxisTick> {
    let decimals = match format {
        TickFormat::Integer => 0,
        TickFormat::Auto => format::precision_for_step(scale.tick_step(TICK_COUNT)),
    };

    scale
        .ticks(TICK_COUNT)
        .into_iter()
        .filter(|value| format != TickFormat::Integer || value.fract() == 0.0)
        .map(|value| AxisTick {
            offset: scale.apply(value),
            label: format::format_number(value, decimals),
        })
        .collect()
}

#[component]
pub fn BottomAxis(ticks: Vec<AxisTick>, width: f64, y: f64, title: String) -> Element {
    rsx! {
        g { class: "chart-axis chart-axis--bottom", transform: "translate(0,{y})",
            line { class: "chart-axis__domain", x1: "0", y1: "0", x2: "{width}", y2: "0" }
            for tick in ticks.iter() {
                g { key: "{tick.label}", transform: "translate({tick.offset},0)",
                    line { class: "chart-axis__tick", y2: "{TICK_SIZE}" }
                    text { class: "chart-axis__label", y: "18", text_anchor: "middle", "{tick.label}" }
                }
            }
            text {
                class: "chart-axis__title",
                x: "{width / 2.0}",
                y: "40",
                text_anchor: "middle",
                "{title}"
            }
        }
    }
}

#[component]
pub fn LeftAxis(ticks: Vec<AxisTick>, height: f64, title: String) -> Element {
    rsx! {
        g { class: "chart-axis chart-axis--left",
            line { class: "chart-axis__domain", x1: "0", y1: "0", x2: "0", y2: "{height}" }
            for tick in ticks.iter() {
                g { key: "{tick.label}", transform: "translate(0,{tick.offset})",
                    line { class: "chart-axis__tick", x2: "{-TICK_SIZE}" }
                    text { class: "chart-axis__label", x: "-9", dy: "0.32em", text_anchor: "end", "{tick.label}" }
                }
            }
            text {
                class: "chart-axis__title",
                transform: "rotate(-90)",
                x: "{-height / 2.0}",
                y: "-45",
                text_anchor: "middle",
                "{title}"
            }
        }
    }
}
