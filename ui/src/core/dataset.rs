//! Dataset loading for team-season tables.
//!
//! The source is a flat CSV with (at least) the columns `yearID`, `lgID`,
//! `teamID`, `name`, `G`, `R` and `W`. Every cell is coerced to its natural
//! type; rows whose season predates the configured cutoff or whose games,
//! runs, or wins are missing or zero are dropped without being reported.

use std::io::Read;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::config::DatasetConfig;
use super::platform;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("couldn't fetch {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },
    #[error("couldn't parse dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// One retained row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSeasonRecord {
    pub year: i32,
    pub league: String,
    pub team_id: String,
    pub name: String,
    pub games: u32,
    pub runs: u32,
    pub wins: u32,
    /// `runs / games`, computed once at load.
    pub runs_per_game: f64,
}

impl TeamSeasonRecord {
    pub fn new(
        year: i32,
        league: impl Into<String>,
        team_id: impl Into<String>,
        name: impl Into<String>,
        games: u32,
        runs: u32,
        wins: u32,
    ) -> Self {
        Self {
            year,
            league: league.into(),
            team_id: team_id.into(),
            name: name.into(),
            games,
            runs,
            wins,
            runs_per_game: f64::from(runs) / f64::from(games),
        }
    }
}

/// Immutable, shared collection of retained records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Arc<[TeamSeasonRecord]>,
}

impl Dataset {
    pub fn from_records(records: Vec<TeamSeasonRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[TeamSeasonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `(min, max)` season, or `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}

/// Fetch and parse the configured source. A failure here ends the session.
pub async fn load(config: &DatasetConfig) -> Result<Dataset, DatasetError> {
    let text = platform::fetch_text(&config.source)
        .await
        .map_err(|reason| DatasetError::Fetch {
            source_name: config.source.clone(),
            reason,
        })?;

    parse_csv(text.as_bytes(), config.min_year)
}

/// Parse CSV text, keeping only modern, complete rows.
pub fn parse_csv<R: Read>(reader: R, min_year: i32) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::resolve(reader.headers()?)?;

    let mut read = 0usize;
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        read += 1;
        if let Some(record) = columns.extract(&row, min_year) {
            records.push(record);
        }
    }

    info!(
        rows_read = read,
        rows_retained = records.len(),
        min_year,
        "dataset loaded"
    );

    Ok(Dataset::from_records(records))
}

struct Columns {
    year: usize,
    league: usize,
    team_id: usize,
    name: usize,
    games: usize,
    runs: usize,
    wins: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(DatasetError::MissingColumn(column))
        };

        Ok(Self {
            year: find("yearID")?,
            league: find("lgID")?,
            team_id: find("teamID")?,
            name: find("name")?,
            games: find("G")?,
            runs: find("R")?,
            wins: find("W")?,
        })
    }

    fn extract(&self, row: &csv::StringRecord, min_year: i32) -> Option<TeamSeasonRecord> {
        let year = parse_year(row.get(self.year)?)?;
        if year < min_year {
            return None;
        }

        let games = parse_count(row.get(self.games)?)?;
        let runs = parse_count(row.get(self.runs)?)?;
        let wins = parse_count(row.get(self.wins)?)?;

        Some(TeamSeasonRecord::new(
            year,
            row.get(self.league).unwrap_or_default(),
            row.get(self.team_id).unwrap_or_default(),
            row.get(self.name).unwrap_or_default(),
            games,
            runs,
            wins,
        ))
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

fn parse_year(raw: &str) -> Option<i32> {
    let value = parse_number(raw)?;
    (value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX))
        .then_some(value as i32)
}

/// A present, positive whole number. Blank, zero, negative and fractional
/// cells don't qualify.
fn parse_count(raw: &str) -> Option<u32> {
    let value = parse_number(raw)?;
    (value > 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX)).then_some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = "\
yearID,lgID,teamID,franchID,name,G,W,L,R
1959,AL,BOS,BOS,Boston Red Sox,154,75,79,726
1960,AL,BOS,BOS,Boston Red Sox,154,65,89,658
1960,NL,CHN,CHC,Chicago Cubs,156,60,94,634
1961,AL,NYA,NYY,New York Yankees,163,109,53,827
1961,NL,PHI,PHI,Philadelphia Phillies,,47,107,584
1962,NL,NYN,NYM,New York Mets,161,0,120,617
1962,AL,MIN,MIN,Minnesota Twins,163,91,71,NA
";

    #[test]
    fn keeps_only_modern_complete_rows() {
        let dataset = parse_csv(SAMPLE.as_bytes(), 1960).unwrap();
        let names: Vec<_> = dataset.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Boston Red Sox", "Chicago Cubs", "New York Yankees"]
        );

        for record in dataset.records() {
            assert!(record.year >= 1960);
            assert!(record.games > 0 && record.runs > 0 && record.wins > 0);
            assert_relative_eq!(
                record.runs_per_game,
                f64::from(record.runs) / f64::from(record.games)
            );
        }
    }

    #[test]
    fn coerces_fields_to_natural_types() {
        let dataset = parse_csv(SAMPLE.as_bytes(), 1960).unwrap();
        let yankees = &dataset.records()[2];
        assert_eq!(yankees.year, 1961);
        assert_eq!(yankees.league, "AL");
        assert_eq!(yankees.team_id, "NYA");
        assert_eq!(yankees.games, 163);
        assert_eq!(yankees.wins, 109);
        assert_eq!(yankees.runs, 827);
    }

    #[test]
    fn year_bounds_cover_retained_rows() {
        let dataset = parse_csv(SAMPLE.as_bytes(), 1960).unwrap();
        assert_eq!(dataset.year_bounds(), Some((1960, 1961)));
        assert_eq!(Dataset::default().year_bounds(), None);
    }

    #[test]
    fn missing_column_is_an_error() {
        let text = "yearID,lgID,teamID,name,G,R\n1960,AL,BOS,Boston,1,1\n";
        let err = parse_csv(text.as_bytes(), 1960).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("W")));
    }

    #[test]
    fn short_rows_are_skipped_not_fatal() {
        let text = "yearID,lgID,teamID,name,G,R,W\n1960,AL,BOS\n1960,AL,BOS,Boston,10,40,5\n";
        let dataset = parse_csv(text.as_bytes(), 1960).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn header_only_source_yields_empty_dataset() {
        let dataset = parse_csv("yearID,lgID,teamID,name,G,R,W\n".as_bytes(), 1960).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn counts_reject_zero_and_fractions() {
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count("12.0"), Some(12));
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("1.5"), None);
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("NA"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn unreadable_source_is_a_fetch_error() {
        let config = DatasetConfig {
            source: "no-such-dir/Teams.csv".to_string(),
            ..DatasetConfig::default()
        };
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let err = runtime.block_on(load(&config)).unwrap_err();
        match &err {
            DatasetError::Fetch { source_name, reason } => {
                assert_eq!(source_name, "no-such-dir/Teams.csv");
                assert!(reason.contains("Teams.csv"));
            }
            other => panic!("expected a fetch error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("couldn't fetch no-such-dir/Teams.csv"));
    }
}
