//! Error types for the domain layer.

use thiserror::Error;

use super::{Country, Dataset};

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Failure of a metric repository lookup.
///
/// Stored in the affected dataset slot of the selection store, so it is
/// `Clone` and compares by value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{dataset} data unavailable for {country}: {reason}")]
    Unavailable {
        dataset: Dataset,
        country: Country,
        reason: String,
    },
}

impl RepositoryError {
    /// Creates an unavailable error.
    pub fn unavailable(dataset: Dataset, country: &Country, reason: impl Into<String>) -> Self {
        RepositoryError::Unavailable {
            dataset,
            country: country.clone(),
            reason: reason.into(),
        }
    }

    /// The dataset whose lookup failed.
    pub fn dataset(&self) -> Dataset {
        match self {
            RepositoryError::Unavailable { dataset, .. } => *dataset,
        }
    }
}
