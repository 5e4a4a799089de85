//! Seed catalog backing the seeded metric repository.
//!
//! A catalog is plain YAML: shared `defaults` plus one entry per country.
//! The built-in catalog is embedded in the binary via `include_str!`.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use crate::domain::foundation::Country;
use crate::domain::records::{MetricKey, MetricRecord, ProblemReport, SchemeRecord, TimeBucket};

/// Year the latest indicators are reported for.
pub const LATEST_YEAR: i32 = 2023;

static BUILTIN: Lazy<Result<SeedCatalog, SeedError>> =
    Lazy::new(|| SeedCatalog::from_yaml_str(include_str!("builtin_seed.yaml")));

/// Errors loading a seed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse seed catalog: {0}")]
    Parse(String),

    #[error("Country '{0}' appears more than once in the seed catalog")]
    DuplicateCountry(Country),

    #[error("Monthly snapshot {year}-{month} has no such month")]
    InvalidMonth { year: i32, month: u8 },
}

/// One year of a metric's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// Indicator values for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    pub year: i32,
    pub month: u8,
    pub indicators: BTreeMap<MetricKey, f64>,
}

/// Values shared by every country unless overridden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedDefaults {
    pub indicators: BTreeMap<MetricKey, f64>,
    pub schemes: Vec<SchemeRecord>,
    pub problems: ProblemReport,
    pub monthly: Vec<MonthlySnapshot>,
}

/// Seeded data for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySeed {
    pub country: Country,
    #[serde(default)]
    pub indicators: BTreeMap<MetricKey, f64>,
    #[serde(default)]
    pub history: BTreeMap<MetricKey, Vec<YearValue>>,
    #[serde(default)]
    pub schemes: Option<Vec<SchemeRecord>>,
    #[serde(default)]
    pub problems: Option<ProblemReport>,
    #[serde(default)]
    pub monthly: Option<Vec<MonthlySnapshot>>,
}

/// Every country the seeded repository can answer for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub defaults: SeedDefaults,
    #[serde(default)]
    pub countries: Vec<CountrySeed>,
}

impl SeedCatalog {
    /// The embedded catalog of six countries.
    pub fn builtin() -> Result<Self, SeedError> {
        (*BUILTIN).clone()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SeedError> {
        let catalog: SeedCatalog =
            serde_yaml::from_str(yaml).map_err(|e| SeedError::Parse(e.to_string()))?;
        catalog.check_unique()?;
        catalog.check_months()?;
        Ok(catalog)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).await.map_err(|e| SeedError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&yaml)
    }

    fn check_unique(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for seed in &self.countries {
            if !seen.insert(&seed.country) {
                return Err(SeedError::DuplicateCountry(seed.country.clone()));
            }
        }
        Ok(())
    }

    fn check_months(&self) -> Result<(), SeedError> {
        let own = self.countries.iter().filter_map(|s| s.monthly.as_ref()).flatten();
        for snapshot in self.defaults.monthly.iter().chain(own) {
            if TimeBucket::month(snapshot.year, snapshot.month).is_err() {
                return Err(SeedError::InvalidMonth {
                    year: snapshot.year,
                    month: snapshot.month,
                });
            }
        }
        Ok(())
    }

    /// Countries in catalog order.
    pub fn countries(&self) -> Vec<Country> {
        self.countries.iter().map(|s| s.country.clone()).collect()
    }

    pub fn find(&self, country: &Country) -> Option<&CountrySeed> {
        self.countries.iter().find(|s| s.country == *country)
    }

    /// Latest indicators: defaults overlaid with the country's own values.
    pub fn indicators(&self, seed: &CountrySeed) -> MetricRecord {
        let mut record = MetricRecord::new(seed.country.clone(), TimeBucket::Year(LATEST_YEAR));
        for (key, value) in self.defaults.indicators.iter().chain(&seed.indicators) {
            record.set(*key, *value);
        }
        record
    }

    pub fn schemes(&self, seed: &CountrySeed) -> Vec<SchemeRecord> {
        seed.schemes
            .clone()
            .unwrap_or_else(|| self.defaults.schemes.clone())
    }

    pub fn problems(&self, seed: &CountrySeed) -> ProblemReport {
        seed.problems
            .clone()
            .unwrap_or_else(|| self.defaults.problems.clone())
    }

    /// Monthly indicator records, oldest first. Snapshots with an invalid
    /// month are skipped; loading a catalog rejects them.
    pub fn monthly(&self, seed: &CountrySeed) -> Vec<MetricRecord> {
        let mut snapshots = seed
            .monthly
            .clone()
            .unwrap_or_else(|| self.defaults.monthly.clone());
        snapshots.sort_by_key(|s| (s.year, s.month));
        snapshots
            .into_iter()
            .filter_map(|snapshot| {
                let period = TimeBucket::month(snapshot.year, snapshot.month).ok()?;
                let mut record = MetricRecord::new(seed.country.clone(), period);
                for (key, value) in snapshot.indicators {
                    record.set(key, value);
                }
                Some(record)
            })
            .collect()
    }

    /// Yearly records for `key`, oldest first.
    pub fn history(&self, seed: &CountrySeed, key: MetricKey) -> Vec<MetricRecord> {
        let mut points = seed.history.get(&key).cloned().unwrap_or_default();
        points.sort_by_key(|p| p.year);
        points
            .into_iter()
            .map(|p| MetricRecord::new(seed.country.clone(), TimeBucket::Year(p.year)).with(key, p.value))
            .collect()
    }
}
