//! Application state for one dashboard session.
//!
//! `DashboardController` owns the loaded dataset, the current filters and the
//! league colors. Its setters are the only way to change filters. Each chart
//! only re-renders when the subset it is handed changes, so a year window
//! change leaves the other chart untouched.

use tracing::{debug, warn};

use super::dataset::{Dataset, TeamSeasonRecord};
use super::filters::{leagues_in, teams_for, FilterState, Selection, YearRange};
use super::palette::ColorAssignment;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardController {
    dataset: Dataset,
    bounds: YearRange,
    filters: FilterState,
    colors: ColorAssignment,
    leagues: Vec<String>,
    team_options: Vec<String>,
}

impl DashboardController {
    /// Initialize from a loaded dataset with both windows spanning every season.
    ///
    /// `fallback_year` seeds the windows when the dataset is empty.
    pub fn new(dataset: Dataset, fallback_year: i32) -> Self {
        let bounds = dataset
            .year_bounds()
            .map(|(min, max)| YearRange::new(min, max))
            .unwrap_or_else(|| YearRange::single(fallback_year));
        let leagues = leagues_in(dataset.records());
        let colors = ColorAssignment::from_leagues(leagues.iter().cloned());
        let team_options = teams_for(&Selection::All, dataset.records());

        Self {
            dataset,
            bounds,
            filters: FilterState::full_range(bounds),
            colors,
            leagues,
            team_options,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn colors(&self) -> &ColorAssignment {
        &self.colors
    }

    /// Observed season span; slider limits.
    pub fn year_bounds(&self) -> YearRange {
        self.bounds
    }

    pub fn leagues(&self) -> &[String] {
        &self.leagues
    }

    /// Team names offered for the current league.
    pub fn team_options(&self) -> &[String] {
        &self.team_options
    }

    pub fn highlight_team(&self) -> Option<&str> {
        self.filters.team.as_only()
    }

    pub fn scatter_records(&self) -> Vec<&TeamSeasonRecord> {
        self.filters.scatter_subset(self.dataset.records())
    }

    pub fn line_records(&self) -> Vec<&TeamSeasonRecord> {
        self.filters.line_subset(self.dataset.records())
    }

    pub fn set_scatter_year_range(&mut self, min: i32, max: i32) {
        self.filters.scatter_years = YearRange::new(min, max).clamp_to(self.bounds);
        debug!(years = ?self.filters.scatter_years, "scatter window changed");
    }

    pub fn set_line_year_range(&mut self, min: i32, max: i32) {
        self.filters.line_years = YearRange::new(min, max).clamp_to(self.bounds);
        debug!(years = ?self.filters.line_years, "line window changed");
    }

    /// Select a league; always discards the team selection and rebuilds the
    /// team options.
    pub fn set_league(&mut self, league: Selection) {
        self.team_options = teams_for(&league, self.dataset.records());
        self.filters.league = league;
        self.filters.team = Selection::All;
        debug!(
            league = self.filters.league.option_value(),
            teams = self.team_options.len(),
            "league changed"
        );
    }

    /// Highlight a team. Names outside the current options are refused and
    /// `false` is returned.
    pub fn set_team(&mut self, team: Selection) -> bool {
        if let Selection::Only(name) = &team {
            if !self.team_options.iter().any(|option| option == name) {
                let league = self.filters.league.option_value();
                warn!(team = %name, league, "team not in league; ignoring");
                return false;
            }
        }
        self.filters.team = team;
        debug!(team = self.filters.team.option_value(), "team changed");
        true
    }
}
