//! Country-by-country comparison table.

use std::collections::{BTreeSet, HashMap};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::foundation::Country;
use crate::domain::records::{resolve_metric, MetricKey, MetricRecord};

/// One table row: the full metric set of one country.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub country: Country,
    pub metrics: Vec<(MetricKey, f64)>,
}

impl ComparisonRow {
    pub fn value(&self, key: MetricKey) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

impl Serialize for ComparisonRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.metrics.len() + 1))?;
        map.serialize_entry("country", &self.country)?;
        for (key, value) in &self.metrics {
            map.serialize_entry(key.field_name(), value)?;
        }
        map.end()
    }
}

/// Builds one row per country, in the order given.
///
/// Every row carries the same columns: the union of indicators present in
/// any selected country's record. A country missing an indicator, or missing
/// a record entirely, gets the missing-metric sentinel for that column.
pub fn build_comparison_table(
    countries: &[Country],
    metrics_by_country: &HashMap<Country, MetricRecord>,
) -> Vec<ComparisonRow> {
    let columns: BTreeSet<MetricKey> = countries
        .iter()
        .filter_map(|country| metrics_by_country.get(country))
        .flat_map(|record| record.keys())
        .collect();

    countries
        .iter()
        .map(|country| {
            let record = metrics_by_country.get(country);
            let metrics = columns
                .iter()
                .map(|key| (*key, resolve_metric(record.and_then(|r| r.get(*key)))))
                .collect();
            ComparisonRow {
                country: country.clone(),
                metrics,
            }
        })
        .collect()
}
