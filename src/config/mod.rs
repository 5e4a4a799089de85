//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DATA_INTELLIGENCE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use data_intelligence::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Comparing up to {} countries", config.dashboard.max_comparison);
//! ```

mod dashboard;
mod error;
mod logging;
mod repository;

pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use repository::RepositoryConfig;

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix
const ENV_PREFIX: &str = "DATA_INTELLIGENCE";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// six-country dashboard over the built-in catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Country catalog and comparison limits
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Seeded repository settings
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DATA_INTELLIGENCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DATA_INTELLIGENCE__DASHBOARD__MAX_COMPARISON=5` -> `dashboard.max_comparison = 5`
    /// - `DATA_INTELLIGENCE__REPOSITORY__SEED_PATH=...` -> `repository.seed_path = ...`
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(None)
    }

    /// Load configuration from a file, with environment variables taking
    /// precedence over file values. The format follows the file extension.
    pub fn load_with_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(Some(path.as_ref()))
    }

    fn build(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(config::Environment::default().prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dashboard.validate()?;
        self.repository.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
