//! Multi-series time tables: one row per period, one column per series.
//!
//! A series is usually a country (comparison trends) or a metric key
//! (single-country indicator trends).

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::foundation::Country;
use crate::domain::records::{resolve_metric, MetricKey};

/// Something that names a column of a time series row.
pub trait SeriesKey: Clone + PartialEq {
    fn series_label(&self) -> &str;
}

impl SeriesKey for Country {
    fn series_label(&self) -> &str {
        self.as_str()
    }
}

impl SeriesKey for MetricKey {
    fn series_label(&self) -> &str {
        self.field_name()
    }
}

/// One period with a value per series.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesRow<S = Country> {
    pub period: String,
    pub values: Vec<(S, f64)>,
}

impl<S: SeriesKey> TimeSeriesRow<S> {
    pub fn value_for(&self, series: &S) -> Option<f64> {
        self.values
            .iter()
            .find(|(s, _)| s == series)
            .map(|(_, v)| *v)
    }
}

impl<S: SeriesKey> Serialize for TimeSeriesRow<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("period", &self.period)?;
        for (series, value) in &self.values {
            map.serialize_entry(series.series_label(), value)?;
        }
        map.end()
    }
}

/// Builds one row per period, in exactly the order supplied.
///
/// `generator` returns the value of a series in a period, or `None` when
/// it has none; absent values take the missing-metric sentinel.
pub fn build_time_series<S, P, F>(series: &[S], generator: F, periods: &[P]) -> Vec<TimeSeriesRow<S>>
where
    S: SeriesKey,
    P: fmt::Display,
    F: Fn(&S, &P) -> Option<f64>,
{
    periods
        .iter()
        .map(|period| TimeSeriesRow {
            period: period.to_string(),
            values: series
                .iter()
                .map(|key| (key.clone(), resolve_metric(generator(key, period))))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn country(name: &str) -> Country {
        Country::new(name).unwrap()
    }

    fn history() -> HashMap<(&'static str, u32), f64> {
        HashMap::from([
            (("India", 2019), 4.2),
            (("India", 2020), -7.3),
            (("Germany", 2019), 0.6),
            (("Germany", 2020), -4.9),
        ])
    }

    #[test]
    fn periods_keep_caller_order() {
        let history = history();
        let rows = build_time_series(
            &[country("India")],
            |c, year: &u32| history.get(&(c.as_str(), *year)).copied(),
            &[2020u32, 2019],
        );

        let periods: Vec<_> = rows.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, vec!["2020", "2019"]);
    }

    #[test]
    fn one_value_per_country_per_period() {
        let history = history();
        let countries = [country("India"), country("Germany")];
        let rows = build_time_series(
            &countries,
            |c, year: &u32| history.get(&(c.as_str(), *year)).copied(),
            &[2019u32, 2020],
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].value_for(&country("India")), Some(-7.3));
        assert_eq!(rows[1].value_for(&country("Germany")), Some(-4.9));
    }

    #[test]
    fn missing_values_take_sentinel() {
        let rows = build_time_series(&[country("Japan")], |_, _: &&str| None, &["Jan", "Feb"]);
        assert!(rows.iter().all(|r| r.values[0].1 == 0.0));
    }

    #[test]
    fn row_serializes_flat() {
        let rows = build_time_series(&[country("India")], |_, _: &&str| Some(6.2), &["Jan"]);
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["period"], "Jan");
        assert_eq!(json["India"], 6.2);
    }

    #[test]
    fn metric_keys_as_series() {
        let keys = [MetricKey::GdpGrowth, MetricKey::Inflation];
        let rows = build_time_series(
            &keys,
            |key, _: &&str| match key {
                MetricKey::GdpGrowth => Some(6.2),
                _ => None,
            },
            &["Jan"],
        );

        assert_eq!(rows[0].value_for(&MetricKey::GdpGrowth), Some(6.2));
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["gdpGrowth"], 6.2);
        assert_eq!(json["inflation"], 0.0);
    }
}
