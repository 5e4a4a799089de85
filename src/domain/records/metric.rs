//! Consumer and economic metric records.
//!
//! A [`MetricRecord`] is a flat mapping from an explicitly enumerated
//! [`MetricKey`] to an `f64`, scoped to one country and one [`TimeBucket`].
//! Absent indicators are `None` at the record level and resolve to
//! [`MISSING_METRIC_VALUE`] through [`resolve_metric`], the one place the
//! default substitution happens.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Country, ValidationError};

/// Value substituted for an indicator that a record does not carry.
pub const MISSING_METRIC_VALUE: f64 = 0.0;

/// Resolves a possibly-absent indicator using the dashboard-wide policy.
///
/// Non-finite values are treated as absent.
pub fn resolve_metric(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => MISSING_METRIC_VALUE,
    }
}

/// Named indicators a metric record may carry.
///
/// Variant order is the column order used when a full metric set is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    // Economic
    GdpGrowth,
    Inflation,
    Unemployment,
    ConsumerSpending,
    // Digital
    InternetPenetration,
    MobileSubscribers,
    DigitalPayments,
    ECommerceGrowth,
    // Country scorecard
    DigitalAdoption,
    GovernanceScore,
    EnvironmentalScore,
    SocialScore,
    TotalSchemes,
    SchemeProgress,
    ProblemSeverity,
}

impl MetricKey {
    pub const ALL: [MetricKey; 15] = [
        MetricKey::GdpGrowth,
        MetricKey::Inflation,
        MetricKey::Unemployment,
        MetricKey::ConsumerSpending,
        MetricKey::InternetPenetration,
        MetricKey::MobileSubscribers,
        MetricKey::DigitalPayments,
        MetricKey::ECommerceGrowth,
        MetricKey::DigitalAdoption,
        MetricKey::GovernanceScore,
        MetricKey::EnvironmentalScore,
        MetricKey::SocialScore,
        MetricKey::TotalSchemes,
        MetricKey::SchemeProgress,
        MetricKey::ProblemSeverity,
    ];

    /// Field name used in flat chart rows.
    pub fn field_name(&self) -> &'static str {
        match self {
            MetricKey::GdpGrowth => "gdpGrowth",
            MetricKey::Inflation => "inflation",
            MetricKey::Unemployment => "unemployment",
            MetricKey::ConsumerSpending => "consumerSpending",
            MetricKey::InternetPenetration => "internetPenetration",
            MetricKey::MobileSubscribers => "mobileSubscribers",
            MetricKey::DigitalPayments => "digitalPayments",
            MetricKey::ECommerceGrowth => "eCommerceGrowth",
            MetricKey::DigitalAdoption => "digitalAdoption",
            MetricKey::GovernanceScore => "governanceScore",
            MetricKey::EnvironmentalScore => "environmentalScore",
            MetricKey::SocialScore => "socialScore",
            MetricKey::TotalSchemes => "totalSchemes",
            MetricKey::SchemeProgress => "schemeProgress",
            MetricKey::ProblemSeverity => "problemSeverity",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::GdpGrowth => "GDP Growth Rate (%)",
            MetricKey::Inflation => "Inflation (%)",
            MetricKey::Unemployment => "Unemployment (%)",
            MetricKey::ConsumerSpending => "Consumer Spending",
            MetricKey::InternetPenetration => "Internet Penetration (%)",
            MetricKey::MobileSubscribers => "Mobile Subscribers (per 100)",
            MetricKey::DigitalPayments => "Digital Payments (%)",
            MetricKey::ECommerceGrowth => "E-commerce Growth (%)",
            MetricKey::DigitalAdoption => "Digital Adoption (%)",
            MetricKey::GovernanceScore => "Governance Score (0-10)",
            MetricKey::EnvironmentalScore => "Environmental Score (0-10)",
            MetricKey::SocialScore => "Social Score (0-10)",
            MetricKey::TotalSchemes => "Total Schemes",
            MetricKey::SchemeProgress => "Scheme Progress (%)",
            MetricKey::ProblemSeverity => "Problem Severity (0-10)",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Time bucket a metric record is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    Year(i32),
    Month { year: i32, month: u8 },
}

impl TimeBucket {
    /// Creates a month bucket, validating the month number.
    pub fn month(year: i32, month: u8) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, i64::from(month)));
        }
        Ok(TimeBucket::Month { year, month })
    }

    /// Axis label: `"2023"` for years, `"Jan"` for months.
    pub fn label(&self) -> String {
        match self {
            TimeBucket::Year(year) => year.to_string(),
            TimeBucket::Month { year, month } => match chrono::Month::try_from(*month) {
                Ok(m) => m.name().chars().take(3).collect(),
                Err(_) => format!("{}-{:02}", year, month),
            },
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Indicator values for one country in one time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub country: Country,
    pub period: TimeBucket,
    #[serde(default)]
    values: BTreeMap<MetricKey, f64>,
}

impl MetricRecord {
    pub fn new(country: Country, period: TimeBucket) -> Self {
        Self {
            country,
            period,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, key: MetricKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: MetricKey, value: f64) {
        self.values.insert(key, value);
    }

    /// Raw lookup; `None` when the record does not carry the indicator.
    pub fn get(&self, key: MetricKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Lookup with the missing-value policy applied.
    pub fn value_or_missing(&self, key: MetricKey) -> f64 {
        resolve_metric(self.get(key))
    }

    /// Keys carried by this record, in [`MetricKey`] order.
    pub fn keys(&self) -> impl Iterator<Item = MetricKey> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
