//! Radar-chart axes on a shared 0-10 scale.
//!
//! Each axis declares how its metric maps onto the common scale. The mapping
//! is an explicit table ([`COMPARISON_AXES`], [`CONSUMER_AXES`]) rather than
//! something inferred from the data.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::foundation::Country;
use crate::domain::records::{resolve_metric, MetricKey, MetricRecord, MISSING_METRIC_VALUE};

/// Ceiling shared by every radar axis.
pub const FULL_MARK: f64 = 10.0;

/// How a raw metric is mapped onto `0..=FULL_MARK`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Metric is already a 0-10 score.
    PassThrough,
    /// Metric is divided by a fixed divisor (e.g. 10 for a 0-100 percentage).
    Divide(f64),
}

impl Normalization {
    /// Applies the mapping. A non-positive divisor yields the missing sentinel.
    pub fn apply(&self, raw: f64) -> f64 {
        match *self {
            Normalization::PassThrough => raw,
            Normalization::Divide(divisor) if divisor > 0.0 => raw / divisor,
            Normalization::Divide(_) => MISSING_METRIC_VALUE,
        }
    }

    /// Largest raw input that still lands within the scale.
    pub fn input_ceiling(&self) -> f64 {
        match *self {
            Normalization::PassThrough => FULL_MARK,
            Normalization::Divide(divisor) => divisor * FULL_MARK,
        }
    }
}

/// A named radar axis bound to one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    pub subject: &'static str,
    pub metric: MetricKey,
    pub normalization: Normalization,
}

impl AxisSpec {
    pub const fn new(subject: &'static str, metric: MetricKey, normalization: Normalization) -> Self {
        Self {
            subject,
            metric,
            normalization,
        }
    }

    /// Scaled value for a record, clamped to `0..=FULL_MARK`.
    pub fn scale(&self, record: Option<&MetricRecord>) -> f64 {
        let raw = resolve_metric(record.and_then(|r| r.get(self.metric)));
        self.normalization.apply(raw).clamp(0.0, FULL_MARK)
    }
}

/// Multi-dimensional country comparison.
pub const COMPARISON_AXES: &[AxisSpec] = &[
    AxisSpec::new("GDP Growth", MetricKey::GdpGrowth, Normalization::PassThrough),
    AxisSpec::new("Digital Adoption", MetricKey::DigitalAdoption, Normalization::Divide(10.0)),
    AxisSpec::new("Governance", MetricKey::GovernanceScore, Normalization::PassThrough),
    AxisSpec::new("Environment", MetricKey::EnvironmentalScore, Normalization::PassThrough),
    AxisSpec::new("Social", MetricKey::SocialScore, Normalization::PassThrough),
    AxisSpec::new("Scheme Progress", MetricKey::SchemeProgress, Normalization::Divide(10.0)),
];

/// Digital and economic profile of a single country.
pub const CONSUMER_AXES: &[AxisSpec] = &[
    AxisSpec::new("GDP Growth", MetricKey::GdpGrowth, Normalization::PassThrough),
    AxisSpec::new("Internet Penetration", MetricKey::InternetPenetration, Normalization::Divide(10.0)),
    AxisSpec::new("Mobile Usage", MetricKey::MobileSubscribers, Normalization::Divide(20.0)),
    AxisSpec::new("Digital Payments", MetricKey::DigitalPayments, Normalization::Divide(5.0)),
    AxisSpec::new("E-commerce Growth", MetricKey::ECommerceGrowth, Normalization::Divide(2.0)),
    AxisSpec::new("Consumer Spending", MetricKey::ConsumerSpending, Normalization::Divide(10.0)),
];

/// One radar axis with one scaled value per country.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxisRow {
    pub subject: String,
    pub values: Vec<(Country, f64)>,
    pub full_mark: f64,
}

impl RadarAxisRow {
    pub fn value_for(&self, country: &Country) -> Option<f64> {
        self.values
            .iter()
            .find(|(c, _)| c == country)
            .map(|(_, v)| *v)
    }
}

impl Serialize for RadarAxisRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 2))?;
        map.serialize_entry("subject", &self.subject)?;
        for (country, value) in &self.values {
            map.serialize_entry(country.as_str(), value)?;
        }
        map.serialize_entry("fullMark", &self.full_mark)?;
        map.end()
    }
}

/// Builds one row per axis, each holding a value per country in the order given.
pub fn build_radar_axes(
    countries: &[Country],
    metrics_by_country: &HashMap<Country, MetricRecord>,
    axes: &[AxisSpec],
) -> Vec<RadarAxisRow> {
    axes.iter()
        .map(|axis| RadarAxisRow {
            subject: axis.subject.to_string(),
            values: countries
                .iter()
                .map(|country| (country.clone(), axis.scale(metrics_by_country.get(country))))
                .collect(),
            full_mark: FULL_MARK,
        })
        .collect()
}
