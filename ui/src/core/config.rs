//! Runtime configuration for the dashboard.
//!
//! Every section derives `serde` with `#[serde(default)]`, so a partial JSON
//! document only overrides the fields it names.

use serde::{Deserialize, Serialize};

/// Root configuration provided to the component tree through context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset: DatasetConfig,
    pub layout: ChartLayout,
}

impl DashboardConfig {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

/// Where the team-season table lives and which seasons count as modern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path (native) or URL relative to the page (web).
    pub source: String,
    /// Earliest season retained by the loader.
    pub min_year: i32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: "Teams.csv".to_string(),
            min_year: 1960,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 30.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

/// Pixel geometry shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 420.0,
            margin: Margin::default(),
        }
    }
}

impl ChartLayout {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn plot_transform(&self) -> String {
        format!("translate({},{})", self.margin.left, self.margin.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_modern_era_cutoff() {
        let config = DashboardConfig::default();
        assert_eq!(config.dataset.source, "Teams.csv");
        assert_eq!(config.dataset.min_year, 1960);
        assert_eq!(config.layout.inner_width(), 550.0);
        assert_eq!(config.layout.inner_height(), 340.0);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = DashboardConfig::from_json(
            r#"{ "dataset": { "source": "data/teams.csv" }, "layout": { "width": 800 } }"#,
        )
        .unwrap();
        assert_eq!(config.dataset.source, "data/teams.csv");
        assert_eq!(config.dataset.min_year, 1960);
        assert_eq!(config.layout.width, 800.0);
        assert_eq!(config.layout.height, 420.0);
        assert_eq!(config.layout.margin, Margin::default());
    }

    #[test]
    fn inner_size_never_goes_negative() {
        let layout = ChartLayout {
            width: 40.0,
            height: 20.0,
            margin: Margin::default(),
        };
        assert_eq!(layout.inner_width(), 0.0);
        assert_eq!(layout.inner_height(), 0.0);
    }
}
