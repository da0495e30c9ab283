//! Filter state and the pure derivations that feed the option lists.

use std::collections::BTreeSet;

use super::dataset::TeamSeasonRecord;
use super::format;

/// Inclusive season window. Always normalized so that `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn single(year: i32) -> Self {
        Self::new(year, year)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Clamp both ends into `bounds`.
    pub fn clamp_to(self, bounds: YearRange) -> Self {
        Self::new(
            self.min.clamp(bounds.min, bounds.max),
            self.max.clamp(bounds.min, bounds.max),
        )
    }

    /// Move the lower bound, pushing the upper bound along if they cross.
    pub fn with_min(self, min: i32) -> Self {
        Self {
            min,
            max: self.max.max(min),
        }
    }

    /// Move the upper bound, pushing the lower bound along if they cross.
    pub fn with_max(self, max: i32) -> Self {
        Self {
            min: self.min.min(max),
            max,
        }
    }

    pub fn label(&self) -> String {
        format::format_year_range(self.min, self.max)
    }
}

/// A dropdown choice: everything, or one named value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Option value used for the catch-all entry in both dropdowns.
    pub const ALL_VALUE: &'static str = "All";

    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    /// Interpret a raw `<option>` value. An empty value names the blank league.
    pub fn from_option_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn option_value(&self) -> &str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Only(value) => value,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    pub fn as_only(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

/// Current user selections. Mutated only through `DashboardController`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub scatter_years: YearRange,
    pub line_years: YearRange,
    pub league: Selection,
    pub team: Selection,
}

impl FilterState {
    /// Both windows open over `bounds`, no league or team chosen.
    pub fn full_range(bounds: YearRange) -> Self {
        Self {
            scatter_years: bounds,
            line_years: bounds,
            league: Selection::All,
            team: Selection::All,
        }
    }

    /// Records visible in the scatter plot: scatter window plus league.
    pub fn scatter_subset<'a>(&self, records: &'a [TeamSeasonRecord]) -> Vec<&'a TeamSeasonRecord> {
        subset(records, self.scatter_years, &self.league)
    }

    /// Records feeding the line chart: line window plus league.
    pub fn line_subset<'a>(&self, records: &'a [TeamSeasonRecord]) -> Vec<&'a TeamSeasonRecord> {
        subset(records, self.line_years, &self.league)
    }
}

fn subset<'a>(
    records: &'a [TeamSeasonRecord],
    years: YearRange,
    league: &Selection,
) -> Vec<&'a TeamSeasonRecord> {
    records
        .iter()
        .filter(|r| years.contains(r.year) && league.matches(&r.league))
        .collect()
}

/// Sorted distinct team names among records of `league` (all records for `All`).
pub fn teams_for(league: &Selection, records: &[TeamSeasonRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| league.matches(&r.league))
        .map(|r| r.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted distinct league identifiers.
pub fn leagues_in(records: &[TeamSeasonRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.league.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
