//! Metric Repository Port - Asynchronous per-country data provider.
//!
//! Every operation is keyed by country and may fail with
//! [`RepositoryError::Unavailable`]. There is no retry, caching or paging at
//! this boundary; each call returns freshly built records.
//!
//! # Example
//!
//! ```ignore
//! let repository: Arc<dyn MetricRepository> = Arc::new(SeededMetricRepository::builtin());
//! let metrics = repository.fetch_consumer_metrics(&country).await?;
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{Country, RepositoryError};
use crate::domain::records::{MetricKey, MetricRecord, ProblemReport, SchemeRecord};

/// Port for fetching dashboard datasets.
#[async_trait]
pub trait MetricRepository: Send + Sync {
    /// Government schemes running in `country`.
    async fn fetch_scheme_records(&self, country: &Country)
        -> Result<Vec<SchemeRecord>, RepositoryError>;

    /// Latest consumer and economic indicators for `country`.
    async fn fetch_consumer_metrics(&self, country: &Country)
        -> Result<MetricRecord, RepositoryError>;

    /// Monthly economic and digital indicators for `country`, oldest first.
    async fn fetch_monthly_metrics(&self, country: &Country)
        -> Result<Vec<MetricRecord>, RepositoryError>;

    /// Problems grouped by domain.
    async fn fetch_problem_records(&self, country: &Country)
        -> Result<ProblemReport, RepositoryError>;

    /// Yearly history of one metric, oldest first.
    ///
    /// Countries without history yield an empty list rather than an error.
    async fn fetch_metric_history(
        &self,
        country: &Country,
        key: MetricKey,
    ) -> Result<Vec<MetricRecord>, RepositoryError>;
}
