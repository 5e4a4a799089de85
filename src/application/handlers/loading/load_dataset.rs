//! LoadDatasetHandler - Fetches one dataset for the current primary country.
//!
//! The fetch is bracketed by `begin_fetch` / `complete_fetch` on the store.
//! The store lock is released while the repository call is pending, so a
//! selection change can land in between; the ticket then makes sure the
//! late result is dropped.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::session::SharedSelectionStore;
use crate::domain::foundation::{Country, Dataset, RepositoryError};
use crate::domain::selection::{DatasetPayload, FetchResolution, FetchTicket};
use crate::ports::MetricRepository;

/// Command to load one dataset.
#[derive(Debug, Clone, Copy)]
pub struct LoadDatasetCommand {
    pub dataset: Dataset,
}

/// Result of a load: the ticket issued and what became of the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDatasetResult {
    pub ticket: FetchTicket,
    pub resolution: FetchResolution,
}

/// Handler for loading datasets into the selection store.
#[derive(Clone)]
pub struct LoadDatasetHandler {
    store: SharedSelectionStore,
    repository: Arc<dyn MetricRepository>,
}

impl LoadDatasetHandler {
    pub fn new(store: SharedSelectionStore, repository: Arc<dyn MetricRepository>) -> Self {
        Self { store, repository }
    }

    pub async fn handle(&self, cmd: LoadDatasetCommand) -> LoadDatasetResult {
        let ticket = self.store.lock().await.begin_fetch(cmd.dataset);
        debug!(
            dataset = %ticket.dataset,
            country = %ticket.country,
            generation = ticket.generation,
            "Fetch issued"
        );

        let result = fetch(self.repository.as_ref(), cmd.dataset, &ticket.country).await;

        let resolution = self.store.lock().await.complete_fetch(&ticket, result);
        match resolution {
            FetchResolution::Applied => debug!(
                dataset = %ticket.dataset,
                country = %ticket.country,
                generation = ticket.generation,
                "Fetch applied"
            ),
            FetchResolution::Discarded(reason) => debug!(
                dataset = %ticket.dataset,
                country = %ticket.country,
                generation = ticket.generation,
                reason = ?reason,
                "Fetch discarded"
            ),
        }

        LoadDatasetResult { ticket, resolution }
    }
}

async fn fetch(
    repository: &dyn MetricRepository,
    dataset: Dataset,
    country: &Country,
) -> Result<DatasetPayload, RepositoryError> {
    match dataset {
        Dataset::Schemes => repository
            .fetch_scheme_records(country)
            .await
            .map(DatasetPayload::Schemes),
        Dataset::Consumer => repository
            .fetch_consumer_metrics(country)
            .await
            .map(DatasetPayload::Consumer),
        Dataset::Problems => repository
            .fetch_problem_records(country)
            .await
            .map(DatasetPayload::Problems),
    }
}
