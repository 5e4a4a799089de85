//! Domain layer containing the dashboard's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (country, dataset, percentage, errors)
//! - `records` - Typed records returned by the metric repository
//! - `selection` - Selection state and the store that mutates it
//! - `derivation` - Pure transforms from records to chart-ready rows

pub mod derivation;
pub mod foundation;
pub mod records;
pub mod selection;
