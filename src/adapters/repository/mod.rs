//! Metric repository adapters.

mod seed;
mod seeded_repository;

pub use seed::{CountrySeed, SeedCatalog, SeedDefaults, SeedError, YearValue, LATEST_YEAR};
pub use seeded_repository::{RepositoryCall, RepositoryOperation, SeededMetricRepository};
