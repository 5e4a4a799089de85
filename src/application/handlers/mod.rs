//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod comparison;
pub mod insights;
pub mod loading;
pub mod session;

pub use comparison::{
    CompareCountriesHandler, CompareCountriesQuery, CountryComparison, DEFAULT_TREND_YEARS,
};
pub use insights::{
    ConsumerInsights, GetConsumerInsightsHandler, GetProblemInsightsHandler,
    GetProblemInsightsQuery, GetSchemeInsightsHandler, GetSchemeInsightsQuery,
    HighPriorityIssue, InsightsError, ProblemInsights, SchemeInsights, SchemeProgress,
};
pub use loading::{
    LoadDashboardHandler, LoadDashboardResult, LoadDatasetCommand, LoadDatasetHandler,
    LoadDatasetResult,
};
pub use session::{
    DashboardSession, SessionError, SharedSelectionStore, StartSessionCommand,
    StartSessionHandler,
};
