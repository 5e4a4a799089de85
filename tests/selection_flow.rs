//! Integration tests for the selection store driven through the handlers.
//!
//! These tests verify the end-to-end flow:
//! 1. A session is started from dashboard configuration
//! 2. Datasets are loaded through the repository port
//! 3. Results that arrive after the selection moved on are discarded
//! 4. Views derive chart rows from whatever the store holds
//!
//! Uses the seeded repository, wrapped where a test needs to hold a fetch
//! in flight.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;

use data_intelligence::adapters::{SeededMetricRepository, WatchObserver};
use data_intelligence::application::{
    CompareCountriesHandler, CompareCountriesQuery, DashboardSession, GetConsumerInsightsHandler,
    GetSchemeInsightsHandler, GetSchemeInsightsQuery, InsightsError, LoadDashboardHandler,
    LoadDatasetCommand, LoadDatasetHandler, StartSessionCommand, StartSessionHandler,
};
use data_intelligence::domain::foundation::{Country, Dataset, RepositoryError};
use data_intelligence::domain::records::{MetricKey, MetricRecord, ProblemReport, SchemeRecord};
use data_intelligence::domain::selection::{DiscardReason, FetchResolution, SelectionOutcome};
use data_intelligence::ports::MetricRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Repository that holds consumer fetches for one country until released.
struct GatedRepository {
    inner: SeededMetricRepository,
    gated: Country,
    started: Arc<Notify>,
    release: Arc<Notify>,
}

impl GatedRepository {
    fn new(gated: Country) -> Self {
        Self {
            inner: SeededMetricRepository::builtin().unwrap(),
            gated,
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl MetricRepository for GatedRepository {
    async fn fetch_scheme_records(
        &self,
        country: &Country,
    ) -> Result<Vec<SchemeRecord>, RepositoryError> {
        self.inner.fetch_scheme_records(country).await
    }

    async fn fetch_consumer_metrics(
        &self,
        country: &Country,
    ) -> Result<MetricRecord, RepositoryError> {
        if *country == self.gated {
            self.started.notify_one();
            self.release.notified().await;
        }
        self.inner.fetch_consumer_metrics(country).await
    }

    async fn fetch_monthly_metrics(
        &self,
        country: &Country,
    ) -> Result<Vec<MetricRecord>, RepositoryError> {
        self.inner.fetch_monthly_metrics(country).await
    }

    async fn fetch_problem_records(
        &self,
        country: &Country,
    ) -> Result<ProblemReport, RepositoryError> {
        self.inner.fetch_problem_records(country).await
    }

    async fn fetch_metric_history(
        &self,
        country: &Country,
        key: MetricKey,
    ) -> Result<Vec<MetricRecord>, RepositoryError> {
        self.inner.fetch_metric_history(country, key).await
    }
}

fn country(name: &str) -> Country {
    Country::new(name).unwrap()
}

fn start(repository: Arc<dyn MetricRepository>) -> DashboardSession {
    StartSessionHandler::new(repository)
        .handle(StartSessionCommand::default())
        .unwrap()
}

// =============================================================================
// Stale fetch discard
// =============================================================================

#[tokio::test]
async fn late_result_for_previous_country_is_discarded() {
    let repository = Arc::new(GatedRepository::new(country("India")));
    let started = repository.started.clone();
    let release = repository.release.clone();
    let session = start(repository);
    let loader = LoadDatasetHandler::new(session.store(), session.repository());

    let slow = tokio::spawn({
        let loader = loader.clone();
        async move {
            loader
                .handle(LoadDatasetCommand {
                    dataset: Dataset::Consumer,
                })
                .await
        }
    });
    started.notified().await;

    // User switches country while the India fetch is in flight
    let outcome = session.store().lock().await.set_primary_country(country("Japan"));
    assert_eq!(outcome, SelectionOutcome::Applied);
    let fast = loader
        .handle(LoadDatasetCommand {
            dataset: Dataset::Consumer,
        })
        .await;
    assert_eq!(fast.resolution, FetchResolution::Applied);

    release.notify_one();
    let slow = slow.await.unwrap();
    assert_eq!(
        slow.resolution,
        FetchResolution::Discarded(DiscardReason::Superseded)
    );

    let store = session.store();
    let store = store.lock().await;
    let slot = &store.state().slots().consumer;
    assert!(!slot.loading);
    assert_eq!(slot.data.as_ref().map(|r| r.country.clone()), Some(country("Japan")));
}

#[tokio::test]
async fn country_change_without_refetch_clears_loading() {
    let repository = Arc::new(GatedRepository::new(country("India")));
    let started = repository.started.clone();
    let release = repository.release.clone();
    let session = start(repository);
    let loader = LoadDatasetHandler::new(session.store(), session.repository());

    let pending = tokio::spawn(async move {
        loader
            .handle(LoadDatasetCommand {
                dataset: Dataset::Consumer,
            })
            .await
    });
    started.notified().await;
    session.store().lock().await.set_primary_country(country("Brazil"));
    release.notify_one();

    let result = pending.await.unwrap();
    assert_eq!(
        result.resolution,
        FetchResolution::Discarded(DiscardReason::CountryChanged)
    );

    let store = session.store();
    let store = store.lock().await;
    let slot = &store.state().slots().consumer;
    assert!(!slot.loading);
    assert!(slot.data.is_none());
}

#[tokio::test]
async fn ended_session_refuses_late_results() {
    let repository = Arc::new(GatedRepository::new(country("India")));
    let started = repository.started.clone();
    let release = repository.release.clone();
    let session = start(repository);
    let loader = LoadDatasetHandler::new(session.store(), session.repository());

    let pending = tokio::spawn(async move {
        loader
            .handle(LoadDatasetCommand {
                dataset: Dataset::Consumer,
            })
            .await
    });
    started.notified().await;
    session.end().await;
    release.notify_one();

    let result = pending.await.unwrap();
    assert_eq!(
        result.resolution,
        FetchResolution::Discarded(DiscardReason::Disposed)
    );
}

// =============================================================================
// End-to-end views
// =============================================================================

#[tokio::test]
async fn comparison_of_two_countries_yields_two_rows() {
    let session = start(Arc::new(SeededMetricRepository::builtin().unwrap()));
    session
        .store()
        .lock()
        .await
        .add_to_comparison(country("United States"));

    let comparison = CompareCountriesHandler::new(session.store(), session.repository())
        .handle(CompareCountriesQuery::default())
        .await
        .unwrap();

    assert_eq!(comparison.table.len(), 2);
    assert_eq!(comparison.table[0].country, country("India"));
    assert_eq!(comparison.table[1].country, country("United States"));
    assert_eq!(comparison.table[0].value(MetricKey::GdpGrowth), Some(7.2));
    assert_eq!(comparison.table[1].value(MetricKey::GovernanceScore), Some(8.2));

    let json = serde_json::to_value(&comparison.table[1]).unwrap();
    assert_eq!(json["country"], "United States");
    assert_eq!(json["digitalAdoption"], 89.0);

    assert_eq!(comparison.trend.len(), 5);
    assert_eq!(comparison.trend[1].value_for(&country("United States")), Some(-3.4));
    assert_eq!(comparison.schemes.len(), 2);
    assert_eq!(comparison.schemes[0].success_rate_label, "16.7%");
}

#[tokio::test]
async fn dashboard_load_feeds_insights() {
    let session = start(Arc::new(SeededMetricRepository::builtin().unwrap()));
    let consumer = GetConsumerInsightsHandler::new(session.store(), session.repository());
    assert_eq!(
        consumer.handle().await,
        Err(InsightsError::NotLoaded(Dataset::Consumer))
    );

    let loader = LoadDatasetHandler::new(session.store(), session.repository());
    let result = LoadDashboardHandler::new(loader).handle().await;
    assert_eq!(result.applied(), 3);

    let insights = consumer.handle().await.unwrap();
    assert_eq!(insights.country, country("India"));
    assert_eq!(insights.indicators.get(MetricKey::InternetPenetration), Some(45.3));
    assert_eq!(insights.economic_trend.len(), 4);
}

#[tokio::test]
async fn switching_country_stops_serving_previous_country() {
    let session = start(Arc::new(SeededMetricRepository::builtin().unwrap()));
    let loader = LoadDatasetHandler::new(session.store(), session.repository());
    let dashboard = LoadDashboardHandler::new(loader);
    let consumer = GetConsumerInsightsHandler::new(session.store(), session.repository());
    let schemes = GetSchemeInsightsHandler::new(session.store());

    assert_eq!(dashboard.handle().await.applied(), 3);
    let india = schemes.handle(GetSchemeInsightsQuery::default()).await.unwrap();
    assert_eq!(india.schemes.len(), 6);

    let outcome = session.store().lock().await.set_primary_country(country("Japan"));
    assert_eq!(outcome, SelectionOutcome::Applied);

    assert_eq!(
        schemes.handle(GetSchemeInsightsQuery::default()).await,
        Err(InsightsError::NotLoaded(Dataset::Schemes))
    );
    assert_eq!(
        consumer.handle().await,
        Err(InsightsError::NotLoaded(Dataset::Consumer))
    );

    assert_eq!(dashboard.handle().await.applied(), 3);
    let japan = schemes.handle(GetSchemeInsightsQuery::default()).await.unwrap();
    assert!(japan.schemes.is_empty());
    let insights = consumer.handle().await.unwrap();
    assert_eq!(insights.country, country("Japan"));
}

#[tokio::test]
async fn watchers_observe_loads_and_selection_changes() {
    let session = start(Arc::new(SeededMetricRepository::builtin().unwrap()));
    let revision = session.store().lock().await.state().revision();
    let (observer, mut revisions) = WatchObserver::channel(revision);
    session.store().lock().await.subscribe(Arc::new(observer));

    LoadDatasetHandler::new(session.store(), session.repository())
        .handle(LoadDatasetCommand {
            dataset: Dataset::Problems,
        })
        .await;
    revisions.changed().await.unwrap();
    // Loading, then Resolved
    assert_eq!(*revisions.borrow_and_update(), 2);

    session.store().lock().await.add_to_comparison(country("China"));
    revisions.changed().await.unwrap();
    assert_eq!(*revisions.borrow_and_update(), 3);
}
