//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Country catalog is empty")]
    EmptyCatalog,

    #[error("Country '{0}' is listed more than once")]
    DuplicateCountry(String),

    #[error("Default country '{0}' is not in the catalog")]
    DefaultCountryNotInCatalog(String),

    #[error("Default country cannot be empty")]
    EmptyDefaultCountry,

    #[error("max_comparison must be between 1 and {catalog_size}, got {max}")]
    InvalidMaxComparison { max: usize, catalog_size: usize },

    #[error("Simulated latency exceeds maximum allowed ({max_ms}ms)")]
    LatencyTooHigh { max_ms: u64 },

    #[error("Seed path cannot be empty")]
    EmptySeedPath,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
