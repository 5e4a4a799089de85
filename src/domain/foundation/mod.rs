//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the dashboard domain.

mod dataset;
mod errors;
mod ids;
mod percentage;

pub use dataset::Dataset;
pub use errors::{RepositoryError, ValidationError};
pub use ids::{Country, SubscriptionId};
pub use percentage::{Percentage, ProgressBand};
