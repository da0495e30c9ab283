//! Group-wise statistics over record subsets.

use std::collections::BTreeMap;

use super::dataset::TeamSeasonRecord;

/// Mean of a field for one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedPoint {
    pub year: i32,
    pub value: f64,
}

/// Numeric fields that can be averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    RunsPerGame,
    Wins,
    Runs,
    Games,
}

impl ValueField {
    pub fn of(self, record: &TeamSeasonRecord) -> f64 {
        match self {
            Self::RunsPerGame => record.runs_per_game,
            Self::Wins => f64::from(record.wins),
            Self::Runs => f64::from(record.runs),
            Self::Games => f64::from(record.games),
        }
    }
}

pub fn aggregate_mean_by_year<'a, I>(records: I, field: ValueField) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'a TeamSeasonRecord>,
{
    aggregate_mean_by_year_with(records, |record| field.of(record))
}

/// Group by season and average `value`, ascending by year.
///
/// Non-finite values are left out of their group's mean; a season with no
/// finite values produces no point.
pub fn aggregate_mean_by_year_with<'a, I, F>(records: I, value: F) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'a TeamSeasonRecord>,
    F: Fn(&TeamSeasonRecord) -> f64,
{
    let mut groups: BTreeMap<i32, (f64, usize)> = BTreeMap::new();

    for record in records {
        let v = value(record);
        if !v.is_finite() {
            continue;
        }
        let entry = groups.entry(record.year).or_insert((0.0, 0));
        entry.0 += v;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(year, (sum, count))| AggregatedPoint {
            year,
            value: sum / count as f64,
        })
        .collect()
}
