//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (session start, dataset loads) write to the selection store;
//! queries (insights, comparison) only read from it.

pub mod handlers;

pub use handlers::{
    // Session
    DashboardSession, SessionError, SharedSelectionStore, StartSessionCommand,
    StartSessionHandler,
    // Loading
    LoadDashboardHandler, LoadDashboardResult, LoadDatasetCommand, LoadDatasetHandler,
    LoadDatasetResult,
    // Insights
    ConsumerInsights, GetConsumerInsightsHandler, GetProblemInsightsHandler,
    GetProblemInsightsQuery, GetSchemeInsightsHandler, GetSchemeInsightsQuery,
    HighPriorityIssue, InsightsError, ProblemInsights, SchemeInsights, SchemeProgress,
    // Comparison
    CompareCountriesHandler, CompareCountriesQuery, CountryComparison, DEFAULT_TREND_YEARS,
};
