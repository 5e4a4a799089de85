//! CompareCountriesHandler - Side-by-side view of the comparison set.
//!
//! Fetches indicators, GDP-growth history and scheme lists for every country
//! in the comparison set, then derives the comparison table, the comparison
//! radar, the trend series and the per-country scheme rows. The store is
//! only read; nothing is written back.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;
use tracing::debug;

use crate::application::handlers::session::SharedSelectionStore;
use crate::domain::derivation::{
    build_comparison_table, build_radar_axes, build_scheme_comparison, build_time_series,
    ComparisonRow, RadarAxisRow, SchemeComparisonRow, TimeSeriesRow, COMPARISON_AXES,
};
use crate::domain::foundation::{Country, RepositoryError};
use crate::domain::records::{MetricKey, MetricRecord, SchemeRecord, TimeBucket};
use crate::ports::MetricRepository;

/// Years shown on the trend chart when the caller does not choose.
pub const DEFAULT_TREND_YEARS: [i32; 5] = [2019, 2020, 2021, 2022, 2023];

/// Query for the comparison view.
#[derive(Debug, Clone)]
pub struct CompareCountriesQuery {
    /// Trend periods, in display order.
    pub years: Vec<i32>,
}

impl Default for CompareCountriesQuery {
    fn default() -> Self {
        Self {
            years: DEFAULT_TREND_YEARS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryComparison {
    pub countries: Vec<Country>,
    pub table: Vec<ComparisonRow>,
    pub radar: Vec<RadarAxisRow>,
    pub trend: Vec<TimeSeriesRow>,
    pub schemes: Vec<SchemeComparisonRow>,
}

pub struct CompareCountriesHandler {
    store: SharedSelectionStore,
    repository: Arc<dyn MetricRepository>,
}

impl CompareCountriesHandler {
    pub fn new(store: SharedSelectionStore, repository: Arc<dyn MetricRepository>) -> Self {
        Self { store, repository }
    }

    pub async fn handle(
        &self,
        query: CompareCountriesQuery,
    ) -> Result<CountryComparison, RepositoryError> {
        let countries = self.store.lock().await.state().comparison_countries().to_vec();
        debug!(countries = countries.len(), "Comparing countries");

        let fetched = try_join_all(countries.iter().map(|country| self.fetch(country))).await?;

        let mut metrics: HashMap<Country, MetricRecord> = HashMap::new();
        let mut history: HashMap<(Country, i32), f64> = HashMap::new();
        let mut schemes: HashMap<Country, Vec<SchemeRecord>> = HashMap::new();
        for (record, years, records) in fetched {
            for point in years {
                if let (TimeBucket::Year(year), Some(value)) =
                    (point.period, point.get(MetricKey::GdpGrowth))
                {
                    history.insert((point.country.clone(), year), value);
                }
            }
            schemes.insert(record.country.clone(), records);
            metrics.insert(record.country.clone(), record);
        }

        let trend = build_time_series(
            &countries,
            |country: &Country, year: &i32| history.get(&(country.clone(), *year)).copied(),
            &query.years,
        );

        Ok(CountryComparison {
            table: build_comparison_table(&countries, &metrics),
            radar: build_radar_axes(&countries, &metrics, COMPARISON_AXES),
            trend,
            schemes: build_scheme_comparison(&countries, &schemes),
            countries,
        })
    }

    async fn fetch(
        &self,
        country: &Country,
    ) -> Result<(MetricRecord, Vec<MetricRecord>, Vec<SchemeRecord>), RepositoryError> {
        futures::try_join!(
            self.repository.fetch_consumer_metrics(country),
            self.repository.fetch_metric_history(country, MetricKey::GdpGrowth),
            self.repository.fetch_scheme_records(country),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeededMetricRepository;
    use crate::domain::foundation::Dataset;
    use crate::domain::records::MISSING_METRIC_VALUE;
    use crate::domain::selection::SelectionStore;
    use tokio::sync::Mutex;

    fn country(name: &str) -> Country {
        Country::new(name).unwrap()
    }

    fn handler(
        members: &[&str],
        repository: SeededMetricRepository,
    ) -> CompareCountriesHandler {
        let mut store = SelectionStore::new(country(members[0]), 4);
        for name in &members[1..] {
            store.add_to_comparison(country(name));
        }
        CompareCountriesHandler::new(Arc::new(Mutex::new(store)), Arc::new(repository))
    }

    #[tokio::test]
    async fn two_countries_two_rows() {
        let handler = handler(
            &["India", "United States"],
            SeededMetricRepository::builtin().unwrap(),
        );

        let comparison = handler.handle(CompareCountriesQuery::default()).await.unwrap();

        assert_eq!(comparison.table.len(), 2);
        assert_eq!(comparison.table[0].country, country("India"));
        assert_eq!(comparison.table[1].value(MetricKey::GdpGrowth), Some(2.1));
        assert_eq!(comparison.radar.len(), COMPARISON_AXES.len());
        assert_eq!(comparison.radar[0].values.len(), 2);
    }

    #[tokio::test]
    async fn trend_follows_requested_years() {
        let handler = handler(
            &["India", "Japan"],
            SeededMetricRepository::builtin().unwrap(),
        );

        let comparison = handler
            .handle(CompareCountriesQuery {
                years: vec![2021, 2020],
            })
            .await
            .unwrap();

        let periods: Vec<_> = comparison.trend.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, vec!["2021", "2020"]);
        assert_eq!(comparison.trend[1].value_for(&country("India")), Some(-7.3));
        // Japan has no history
        assert_eq!(
            comparison.trend[0].value_for(&country("Japan")),
            Some(MISSING_METRIC_VALUE)
        );
    }

    #[tokio::test]
    async fn scheme_rows_follow_comparison_order() {
        let handler = handler(
            &["India", "Germany"],
            SeededMetricRepository::builtin().unwrap(),
        );

        let comparison = handler.handle(CompareCountriesQuery::default()).await.unwrap();

        assert_eq!(comparison.schemes.len(), 2);
        let india = &comparison.schemes[0];
        assert_eq!(india.country, country("India"));
        assert_eq!((india.active, india.completed), (5, 1));
        assert_eq!(india.success_rate_label, "16.7%");

        let germany = &comparison.schemes[1];
        assert_eq!(germany.country, country("Germany"));
        assert_eq!(germany.success_rate, None);
        assert_eq!(germany.success_rate_label, "N/A");
    }

    #[tokio::test]
    async fn scheme_failure_fails_the_view() {
        let handler = handler(
            &["India", "Brazil"],
            SeededMetricRepository::builtin()
                .unwrap()
                .with_failure(Dataset::Schemes, country("Brazil")),
        );

        let error = handler
            .handle(CompareCountriesQuery::default())
            .await
            .unwrap_err();

        assert_eq!(error.dataset(), Dataset::Schemes);
    }

    #[tokio::test]
    async fn any_failure_fails_the_view() {
        let handler = handler(
            &["India", "China"],
            SeededMetricRepository::builtin()
                .unwrap()
                .with_failure(Dataset::Consumer, country("China")),
        );

        let error = handler
            .handle(CompareCountriesQuery::default())
            .await
            .unwrap_err();

        assert_eq!(error.dataset(), Dataset::Consumer);
    }
}
