//! Seeded Metric Repository - In-process implementation of MetricRepository.
//!
//! Answers every lookup from a [`SeedCatalog`], after an optional simulated
//! latency, standing in for a remote data provider.
//!
//! # Features
//!
//! - Built-in or YAML-loaded catalog
//! - Simulated latency per request
//! - Failure injection per dataset and country
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let repository = SeededMetricRepository::builtin()?
//!     .with_latency(Duration::from_millis(500))
//!     .with_failure(Dataset::Problems, country.clone());
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use super::seed::{CountrySeed, SeedCatalog, SeedError};
use crate::config::RepositoryConfig;
use crate::domain::foundation::{Country, Dataset, RepositoryError};
use crate::domain::records::{MetricKey, MetricRecord, ProblemReport, SchemeRecord};
use crate::ports::MetricRepository;

/// Which repository operation was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryOperation {
    Schemes,
    Consumer,
    Monthly,
    Problems,
    History(MetricKey),
}

impl RepositoryOperation {
    /// Dataset an error for this operation is reported against.
    pub fn dataset(&self) -> Dataset {
        match self {
            RepositoryOperation::Schemes => Dataset::Schemes,
            RepositoryOperation::Consumer
            | RepositoryOperation::Monthly
            | RepositoryOperation::History(_) => Dataset::Consumer,
            RepositoryOperation::Problems => Dataset::Problems,
        }
    }
}

/// A recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCall {
    pub operation: RepositoryOperation,
    pub country: Country,
}

/// Repository answering from a seed catalog.
#[derive(Debug, Clone)]
pub struct SeededMetricRepository {
    catalog: Arc<SeedCatalog>,
    latency: Duration,
    failures: Arc<Mutex<HashSet<(Dataset, Country)>>>,
    calls: Arc<Mutex<Vec<RepositoryCall>>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SeededMetricRepository {
    pub fn new(catalog: SeedCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            latency: Duration::ZERO,
            failures: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Repository over the embedded six-country catalog.
    pub fn builtin() -> Result<Self, SeedError> {
        Ok(Self::new(SeedCatalog::builtin()?))
    }

    /// Builds a repository from configuration, loading `seed_path` if set.
    pub async fn from_config(config: &RepositoryConfig) -> Result<Self, SeedError> {
        let catalog = match &config.seed_path {
            Some(path) => SeedCatalog::load(path).await?,
            None => SeedCatalog::builtin()?,
        };
        Ok(Self::new(catalog).with_latency(config.simulated_latency()))
    }

    /// Sets simulated latency per request.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes every lookup of `dataset` for `country` fail.
    pub fn with_failure(self, dataset: Dataset, country: Country) -> Self {
        self.inject_failure(dataset, country);
        self
    }

    pub fn inject_failure(&self, dataset: Dataset, country: Country) {
        locked(&self.failures).insert((dataset, country));
    }

    pub fn clear_failures(&self) {
        locked(&self.failures).clear();
    }

    pub fn catalog(&self) -> &SeedCatalog {
        &self.catalog
    }

    /// Returns the number of calls made to this repository.
    pub fn call_count(&self) -> usize {
        locked(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<RepositoryCall> {
        locked(&self.calls).clone()
    }

    /// Records the call, waits out the latency, and resolves the country.
    async fn lookup(
        &self,
        operation: RepositoryOperation,
        country: &Country,
    ) -> Result<&CountrySeed, RepositoryError> {
        locked(&self.calls).push(RepositoryCall {
            operation,
            country: country.clone(),
        });

        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        let dataset = operation.dataset();
        if locked(&self.failures).contains(&(dataset, country.clone())) {
            debug!(%country, %dataset, "Injected repository failure");
            return Err(RepositoryError::unavailable(dataset, country, "provider unavailable"));
        }

        self.catalog
            .find(country)
            .ok_or_else(|| RepositoryError::unavailable(dataset, country, "country not in catalog"))
    }
}

#[async_trait]
impl MetricRepository for SeededMetricRepository {
    async fn fetch_scheme_records(
        &self,
        country: &Country,
    ) -> Result<Vec<SchemeRecord>, RepositoryError> {
        let seed = self.lookup(RepositoryOperation::Schemes, country).await?;
        Ok(self.catalog.schemes(seed))
    }

    async fn fetch_consumer_metrics(
        &self,
        country: &Country,
    ) -> Result<MetricRecord, RepositoryError> {
        let seed = self.lookup(RepositoryOperation::Consumer, country).await?;
        Ok(self.catalog.indicators(seed))
    }

    async fn fetch_monthly_metrics(
        &self,
        country: &Country,
    ) -> Result<Vec<MetricRecord>, RepositoryError> {
        let seed = self.lookup(RepositoryOperation::Monthly, country).await?;
        Ok(self.catalog.monthly(seed))
    }

    async fn fetch_problem_records(
        &self,
        country: &Country,
    ) -> Result<ProblemReport, RepositoryError> {
        let seed = self.lookup(RepositoryOperation::Problems, country).await?;
        Ok(self.catalog.problems(seed))
    }

    async fn fetch_metric_history(
        &self,
        country: &Country,
        key: MetricKey,
    ) -> Result<Vec<MetricRecord>, RepositoryError> {
        let seed = self.lookup(RepositoryOperation::History(key), country).await?;
        Ok(self.catalog.history(seed, key))
    }
}
