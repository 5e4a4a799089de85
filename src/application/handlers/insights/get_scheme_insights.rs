//! GetSchemeInsightsHandler - Government scheme view for the primary country.
//!
//! Summary figures (tally, success rate, category mix, per-region summary)
//! cover every scheme of the country; the region filter only narrows the
//! scheme list.

use serde::Serialize;

use super::{loaded, InsightsError};
use crate::application::handlers::session::SharedSelectionStore;
use crate::domain::derivation::{
    build_category_aggregate, compute_success_rate, format_rate, region_options, region_summary,
    CategoryCount, RegionFilter, RegionSummary,
};
use crate::domain::foundation::{Dataset, Percentage, ProgressBand};
use crate::domain::records::{SchemeRecord, SchemeTally};

/// Query for the scheme view.
#[derive(Debug, Clone, Default)]
pub struct GetSchemeInsightsQuery {
    pub region: RegionFilter,
}

/// Progress bar entry for one listed scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeProgress {
    pub name: String,
    pub progress: Percentage,
    pub band: ProgressBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeInsights {
    /// `All Regions` followed by each region in first-seen order.
    pub region_options: Vec<String>,
    pub schemes: Vec<SchemeRecord>,
    pub tally: SchemeTally,
    /// `None` when there are no active or completed schemes.
    pub success_rate: Option<f64>,
    pub success_rate_label: String,
    pub by_category: Vec<CategoryCount>,
    pub by_region: Vec<RegionSummary>,
    pub progress: Vec<SchemeProgress>,
}

pub struct GetSchemeInsightsHandler {
    store: SharedSelectionStore,
}

impl GetSchemeInsightsHandler {
    pub fn new(store: SharedSelectionStore) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetSchemeInsightsQuery,
    ) -> Result<SchemeInsights, InsightsError> {
        let records = {
            let store = self.store.lock().await;
            loaded(Dataset::Schemes, &store.state().slots().schemes)?
        };

        let tally = SchemeTally::from_records(&records);
        let rate = compute_success_rate(tally.completed, tally.active);
        let schemes: Vec<SchemeRecord> = query.region.select(&records).into_iter().cloned().collect();
        let progress = schemes
            .iter()
            .map(|scheme| SchemeProgress {
                name: scheme.name.clone(),
                progress: scheme.progress,
                band: scheme.progress.band(),
            })
            .collect();

        Ok(SchemeInsights {
            region_options: region_options(&records),
            by_category: build_category_aggregate(records.iter(), |s| s.category.clone()),
            by_region: region_summary(&records),
            success_rate: rate.ok(),
            success_rate_label: format_rate(rate),
            tally,
            schemes,
            progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeededMetricRepository;
    use crate::application::handlers::loading::{LoadDatasetCommand, LoadDatasetHandler};
    use crate::domain::derivation::{ALL_REGIONS, UNDEFINED_RATE_LABEL};
    use crate::domain::foundation::Country;
    use crate::domain::selection::SelectionStore;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    async fn loaded_store(country: &str) -> SharedSelectionStore {
        let store = Arc::new(Mutex::new(SelectionStore::new(
            Country::new(country).unwrap(),
            4,
        )));
        let repository = Arc::new(SeededMetricRepository::builtin().unwrap());
        LoadDatasetHandler::new(store.clone(), repository)
            .handle(LoadDatasetCommand {
                dataset: Dataset::Schemes,
            })
            .await;
        store
    }

    #[tokio::test]
    async fn india_schemes_across_all_regions() {
        let handler = GetSchemeInsightsHandler::new(loaded_store("India").await);

        let insights = handler.handle(GetSchemeInsightsQuery::default()).await.unwrap();

        assert_eq!(
            insights.region_options,
            vec![ALL_REGIONS, "National", "Maharashtra", "Kerala"]
        );
        assert_eq!(insights.schemes.len(), 6);
        assert_eq!(
            insights.tally,
            SchemeTally {
                active: 5,
                completed: 1,
                pending: 0
            }
        );
        assert_eq!(insights.success_rate_label, "16.7%");
        assert_eq!(insights.by_category.len(), 6);
        assert_eq!(insights.progress[2].band, ProgressBand::OnTrack);
        assert_eq!(insights.progress[1].band, ProgressBand::Moderate);

        let regions: Vec<_> = insights.by_region.iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, vec!["National", "Maharashtra", "Kerala"]);
        let counted: usize = insights.by_region.iter().map(|r| r.schemes).sum();
        assert_eq!(counted, 6);
        assert_eq!(insights.by_region[2].schemes, 1);
    }

    #[tokio::test]
    async fn region_filter_narrows_only_the_list() {
        let handler = GetSchemeInsightsHandler::new(loaded_store("India").await);

        let insights = handler
            .handle(GetSchemeInsightsQuery {
                region: RegionFilter::from_label("Kerala"),
            })
            .await
            .unwrap();

        assert_eq!(insights.schemes.len(), 1);
        assert_eq!(insights.schemes[0].name, "Kerala Digital Literacy");
        assert_eq!(insights.progress.len(), 1);
        assert_eq!(insights.tally.total(), 6);
        assert_eq!(insights.by_region.len(), 3);
    }

    #[tokio::test]
    async fn country_without_schemes_has_undefined_rate() {
        let handler = GetSchemeInsightsHandler::new(loaded_store("Japan").await);

        let insights = handler.handle(GetSchemeInsightsQuery::default()).await.unwrap();

        assert!(insights.schemes.is_empty());
        assert_eq!(insights.region_options, vec![ALL_REGIONS]);
        assert_eq!(insights.success_rate, None);
        assert_eq!(insights.success_rate_label, UNDEFINED_RATE_LABEL);
        assert!(insights.by_region.is_empty());
    }
}
