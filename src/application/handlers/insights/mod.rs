//! Insight query handlers - Chart-ready views over loaded datasets.
//!
//! Each handler copies one dataset slot out of the selection store and
//! releases the lock before deriving anything. A dataset must have been
//! loaded first; only the consumer view fetches more, its monthly trends.

mod get_consumer_insights;
mod get_problem_insights;
mod get_scheme_insights;

pub use get_consumer_insights::{
    ConsumerInsights, GetConsumerInsightsHandler, DIGITAL_SERIES, ECONOMIC_SERIES,
};
pub use get_problem_insights::{
    GetProblemInsightsHandler, GetProblemInsightsQuery, HighPriorityIssue, ProblemInsights,
};
pub use get_scheme_insights::{
    GetSchemeInsightsHandler, GetSchemeInsightsQuery, SchemeInsights, SchemeProgress,
};

use thiserror::Error;

use crate::domain::foundation::{Dataset, RepositoryError};
use crate::domain::selection::DatasetSlot;

/// Why an insight could not be derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightsError {
    #[error("{0} data is still loading")]
    Loading(Dataset),

    #[error("{0} data has not been loaded")]
    NotLoaded(Dataset),

    #[error(transparent)]
    Unavailable(#[from] RepositoryError),
}

/// Copies the slot's payload out, or explains why there is none.
///
/// A fetch in flight wins over older data or errors in the slot.
pub(crate) fn loaded<T: Clone>(dataset: Dataset, slot: &DatasetSlot<T>) -> Result<T, InsightsError> {
    if slot.loading {
        return Err(InsightsError::Loading(dataset));
    }
    if let Some(error) = &slot.error {
        return Err(InsightsError::Unavailable(error.clone()));
    }
    slot.data.clone().ok_or(InsightsError::NotLoaded(dataset))
}
