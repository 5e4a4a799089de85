//! StartSessionHandler - Builds the per-session selection store.
//!
//! A session owns one `SelectionStore`, shared by every view handler through
//! [`SharedSelectionStore`]. The store is created here from configuration
//! and disposed when the session ends.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::adapters::{SeedError, SeededMetricRepository, TracingObserver};
use crate::config::{AppConfig, DashboardConfig, ValidationError};
use crate::domain::selection::SelectionStore;
use crate::ports::{MetricRepository, SelectionObserver};

/// Selection store shared between handlers of one session.
///
/// The lock is only ever held for synchronous store calls, never across a
/// repository await.
pub type SharedSelectionStore = Arc<Mutex<SelectionStore>>;

/// Errors starting a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid dashboard configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Failed to load seed catalog: {0}")]
    Seed(#[from] SeedError),
}

/// A running dashboard session: its store and the repository views read from.
#[derive(Clone)]
pub struct DashboardSession {
    store: SharedSelectionStore,
    repository: Arc<dyn MetricRepository>,
}

impl DashboardSession {
    pub fn store(&self) -> SharedSelectionStore {
        self.store.clone()
    }

    pub fn repository(&self) -> Arc<dyn MetricRepository> {
        self.repository.clone()
    }

    /// Disposes the store: observers are dropped and in-flight fetch results
    /// are refused from now on.
    pub async fn end(&self) {
        let mut store = self.store.lock().await;
        store.dispose();
        info!(revision = store.state().revision(), "Dashboard session ended");
    }
}

/// Command to start a session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    pub dashboard: DashboardConfig,
    /// Log selection changes through `tracing`.
    pub trace_changes: bool,
}

/// Handler for starting sessions against a given repository.
pub struct StartSessionHandler {
    repository: Arc<dyn MetricRepository>,
}

impl StartSessionHandler {
    pub fn new(repository: Arc<dyn MetricRepository>) -> Self {
        Self { repository }
    }

    /// Starts a session over the seeded repository described by `config`.
    pub async fn from_config(config: &AppConfig) -> Result<DashboardSession, SessionError> {
        config.validate()?;
        let repository = SeededMetricRepository::from_config(&config.repository).await?;
        let handler = Self::new(Arc::new(repository));
        handler.handle(StartSessionCommand {
            dashboard: config.dashboard.clone(),
            trace_changes: true,
        })
    }

    pub fn handle(&self, cmd: StartSessionCommand) -> Result<DashboardSession, SessionError> {
        cmd.dashboard.validate()?;
        let primary = cmd.dashboard.primary_country()?;
        let catalog = cmd.dashboard.catalog();

        let mut store =
            SelectionStore::new(primary.clone(), cmd.dashboard.max_comparison).with_catalog(catalog);
        if cmd.trace_changes {
            let observer: Arc<dyn SelectionObserver> = Arc::new(TracingObserver::new());
            store.subscribe(observer);
        }

        info!(
            %primary,
            countries = store.catalog().len(),
            max_comparison = cmd.dashboard.max_comparison,
            "Dashboard session started"
        );

        Ok(DashboardSession {
            store: Arc::new(Mutex::new(store)),
            repository: self.repository.clone(),
        })
    }
}
