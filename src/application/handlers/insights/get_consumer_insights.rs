//! GetConsumerInsightsHandler - Consumer profile of the primary country.
//!
//! Reads the loaded consumer indicators from the store, then fetches the
//! monthly snapshots for the same country to chart economic and digital
//! trends month by month.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::{loaded, InsightsError};
use crate::application::handlers::session::SharedSelectionStore;
use crate::domain::derivation::{
    build_radar_axes, build_time_series, RadarAxisRow, TimeSeriesRow, CONSUMER_AXES,
};
use crate::domain::foundation::{Country, Dataset};
use crate::domain::records::{MetricKey, MetricRecord, TimeBucket};
use crate::ports::MetricRepository;

/// Series on the economic trend chart.
pub const ECONOMIC_SERIES: [MetricKey; 3] = [
    MetricKey::GdpGrowth,
    MetricKey::Inflation,
    MetricKey::Unemployment,
];

/// Series on the digital adoption trend chart.
pub const DIGITAL_SERIES: [MetricKey; 4] = [
    MetricKey::InternetPenetration,
    MetricKey::MobileSubscribers,
    MetricKey::DigitalPayments,
    MetricKey::ECommerceGrowth,
];

/// Consumer indicators plus their radar projection and monthly trends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerInsights {
    pub country: Country,
    pub indicators: MetricRecord,
    pub radar: Vec<RadarAxisRow>,
    pub economic_trend: Vec<TimeSeriesRow<MetricKey>>,
    pub digital_trend: Vec<TimeSeriesRow<MetricKey>>,
}

pub struct GetConsumerInsightsHandler {
    store: SharedSelectionStore,
    repository: Arc<dyn MetricRepository>,
}

impl GetConsumerInsightsHandler {
    pub fn new(store: SharedSelectionStore, repository: Arc<dyn MetricRepository>) -> Self {
        Self { store, repository }
    }

    pub async fn handle(&self) -> Result<ConsumerInsights, InsightsError> {
        let indicators = {
            let store = self.store.lock().await;
            loaded(Dataset::Consumer, &store.state().slots().consumer)?
        };

        let country = indicators.country.clone();
        let mut by_country = HashMap::new();
        by_country.insert(country.clone(), indicators.clone());
        let radar = build_radar_axes(std::slice::from_ref(&country), &by_country, CONSUMER_AXES);

        let monthly = self.repository.fetch_monthly_metrics(&country).await?;
        debug!(%country, months = monthly.len(), "Building consumer trends");
        let periods: Vec<TimeBucket> = monthly.iter().map(|r| r.period).collect();
        let value = |key: &MetricKey, period: &TimeBucket| {
            monthly
                .iter()
                .find(|r| r.period == *period)
                .and_then(|r| r.get(*key))
        };

        Ok(ConsumerInsights {
            economic_trend: build_time_series(&ECONOMIC_SERIES, value, &periods),
            digital_trend: build_time_series(&DIGITAL_SERIES, value, &periods),
            country,
            indicators,
            radar,
        })
    }
}
