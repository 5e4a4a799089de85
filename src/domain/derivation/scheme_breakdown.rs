//! Government-scheme derivations: region filter, region options, per-region
//! summary and the per-country scheme comparison.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::rates::{compute_success_rate, format_rate};
use crate::domain::foundation::Country;
use crate::domain::records::{Budget, SchemeRecord, SchemeTally};

/// Label of the catch-all region option.
pub const ALL_REGIONS: &str = "All Regions";

/// Which region a scheme view is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionFilter {
    #[default]
    AllRegions,
    Region(String),
}

impl RegionFilter {
    /// Parses a selector value; [`ALL_REGIONS`] selects every region.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_REGIONS {
            RegionFilter::AllRegions
        } else {
            RegionFilter::Region(label.to_string())
        }
    }

    pub fn matches(&self, record: &SchemeRecord) -> bool {
        match self {
            RegionFilter::AllRegions => true,
            RegionFilter::Region(region) => record.region == *region,
        }
    }

    pub fn select<'a>(&self, records: &'a [SchemeRecord]) -> Vec<&'a SchemeRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Region selector options: [`ALL_REGIONS`] followed by each distinct
/// region in first-seen order.
pub fn region_options(records: &[SchemeRecord]) -> Vec<String> {
    let mut options = vec![ALL_REGIONS.to_string()];
    for record in records {
        if !options.iter().any(|o| *o == record.region) {
            options.push(record.region.clone());
        }
    }
    options
}

/// Scheme count, budget and mean progress of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub region: String,
    pub schemes: usize,
    /// One total per currency, in first-seen order.
    pub budget: Vec<Budget>,
    pub average_progress: f64,
}

/// One summary per region, in first-seen order.
pub fn region_summary(records: &[SchemeRecord]) -> Vec<RegionSummary> {
    region_options(records)
        .into_iter()
        .skip(1)
        .map(|region| {
            let members: Vec<&SchemeRecord> =
                records.iter().filter(|r| r.region == region).collect();
            let progress: f64 = members.iter().map(|r| r.progress.as_f64()).sum();
            RegionSummary {
                schemes: members.len(),
                budget: total_budget(members.iter().copied()),
                average_progress: progress / members.len() as f64,
                region,
            }
        })
        .collect()
}

/// Scheme figures of one compared country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeComparisonRow {
    pub country: Country,
    pub active: u64,
    pub completed: u64,
    pub pending: u64,
    pub budget: Vec<Budget>,
    /// `None` when the country has no active or completed schemes.
    pub success_rate: Option<f64>,
    pub success_rate_label: String,
}

/// One row per country in the order given. A country without a scheme list
/// gets zero counts and an undefined success rate.
pub fn build_scheme_comparison(
    countries: &[Country],
    schemes_by_country: &HashMap<Country, Vec<SchemeRecord>>,
) -> Vec<SchemeComparisonRow> {
    countries
        .iter()
        .map(|country| {
            let records = schemes_by_country.get(country).map(Vec::as_slice).unwrap_or(&[]);
            let tally = SchemeTally::from_records(records);
            let rate = compute_success_rate(tally.completed, tally.active);
            SchemeComparisonRow {
                country: country.clone(),
                active: tally.active,
                completed: tally.completed,
                pending: tally.pending,
                budget: total_budget(records.iter()),
                success_rate: rate.ok(),
                success_rate_label: format_rate(rate),
            }
        })
        .collect()
}

/// Sums budgets per currency, in first-seen currency order.
fn total_budget<'a>(records: impl IntoIterator<Item = &'a SchemeRecord>) -> Vec<Budget> {
    let mut totals: Vec<Budget> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|b| b.currency == record.budget.currency) {
            Some(total) => total.amount += record.budget.amount,
            None => totals.push(record.budget),
        }
    }
    totals
}
