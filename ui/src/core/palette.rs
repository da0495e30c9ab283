//! League → color mapping.

use super::filters::leagues_in;
use super::dataset::TeamSeasonRecord;

/// The ten-color Tableau categorical scheme.
pub const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

/// Fill used for a league the assignment was never told about.
pub const UNASSIGNED_COLOR: &str = "#999999";

/// Stable league colors, built once from the full dataset so redraws agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignment {
    entries: Vec<(String, &'static str)>,
}

impl ColorAssignment {
    pub fn from_records(records: &[TeamSeasonRecord]) -> Self {
        Self::from_leagues(leagues_in(records))
    }

    /// Assign colors in order; the scheme wraps after ten leagues.
    pub fn from_leagues<I, S>(leagues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = leagues
            .into_iter()
            .enumerate()
            .map(|(index, league)| (league.into(), TABLEAU10[index % TABLEAU10.len()]))
            .collect();
        Self { entries }
    }

    pub fn color_for(&self, league: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(name, _)| name == league)
            .map(|(_, color)| *color)
            .unwrap_or(UNASSIGNED_COLOR)
    }

    /// `(league, color)` pairs in assignment order, for the legend.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
