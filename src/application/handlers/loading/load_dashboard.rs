//! LoadDashboardHandler - Loads every dataset for the primary country at once.

use futures::future::join_all;
use tracing::info;

use super::load_dataset::{LoadDatasetCommand, LoadDatasetHandler, LoadDatasetResult};
use crate::domain::foundation::Dataset;

/// Summary of a dashboard load.
#[derive(Debug, Clone)]
pub struct LoadDashboardResult {
    pub loads: Vec<LoadDatasetResult>,
}

impl LoadDashboardResult {
    pub fn applied(&self) -> usize {
        self.loads.iter().filter(|l| l.resolution.is_applied()).count()
    }

    pub fn get(&self, dataset: Dataset) -> Option<&LoadDatasetResult> {
        self.loads.iter().find(|l| l.ticket.dataset == dataset)
    }
}

/// Issues the three dataset fetches concurrently.
///
/// Each dataset resolves independently; a failure in one leaves the others
/// untouched.
#[derive(Clone)]
pub struct LoadDashboardHandler {
    loader: LoadDatasetHandler,
}

impl LoadDashboardHandler {
    pub fn new(loader: LoadDatasetHandler) -> Self {
        Self { loader }
    }

    pub async fn handle(&self) -> LoadDashboardResult {
        let loads = join_all(
            Dataset::ALL
                .iter()
                .map(|dataset| self.loader.handle(LoadDatasetCommand { dataset: *dataset })),
        )
        .await;

        let result = LoadDashboardResult { loads };
        info!(
            applied = result.applied(),
            requested = Dataset::ALL.len(),
            "Dashboard load finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeededMetricRepository;
    use crate::application::handlers::session::SharedSelectionStore;
    use crate::domain::foundation::Country;
    use crate::domain::selection::{SelectionStore, DEFAULT_MAX_COMPARISON};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    fn country(name: &str) -> Country {
        Country::new(name).unwrap()
    }

    fn store() -> SharedSelectionStore {
        Arc::new(Mutex::new(SelectionStore::new(
            country("India"),
            DEFAULT_MAX_COMPARISON,
        )))
    }

    #[tokio::test]
    async fn loads_all_three_datasets() {
        let store = store();
        let repository = Arc::new(SeededMetricRepository::builtin().unwrap());
        let handler =
            LoadDashboardHandler::new(LoadDatasetHandler::new(store.clone(), repository.clone()));

        let result = handler.handle().await;

        assert_eq!(result.applied(), 3);
        assert_eq!(repository.call_count(), 3);
        let store = store.lock().await;
        for dataset in Dataset::ALL {
            assert!(store.state().slots().has_data(dataset));
            assert!(!store.state().slots().is_loading(dataset));
        }
    }

    #[tokio::test]
    async fn fetches_run_concurrently() {
        let repository = Arc::new(
            SeededMetricRepository::builtin()
                .unwrap()
                .with_latency(Duration::from_millis(60)),
        );
        let handler = LoadDashboardHandler::new(LoadDatasetHandler::new(store(), repository));
        let started = std::time::Instant::now();

        handler.handle().await;

        assert!(started.elapsed() < Duration::from_millis(170));
    }

    #[tokio::test]
    async fn one_failure_leaves_other_datasets_loaded() {
        let store = store();
        let repository = Arc::new(
            SeededMetricRepository::builtin()
                .unwrap()
                .with_failure(Dataset::Consumer, country("India")),
        );
        let handler = LoadDashboardHandler::new(LoadDatasetHandler::new(store.clone(), repository));

        let result = handler.handle().await;

        // A failed fetch still resolves the slot
        assert!(result.get(Dataset::Consumer).unwrap().resolution.is_applied());
        let store = store.lock().await;
        let slots = store.state().slots();
        assert!(slots.error(Dataset::Consumer).is_some());
        assert!(slots.has_data(Dataset::Schemes));
        assert!(slots.has_data(Dataset::Problems));
    }
}
