//! Adapters - Implementations of port interfaces.
//!
//! - `repository` - Seeded in-process `MetricRepository`
//! - `observers` - `SelectionObserver` implementations (tracing, watch channel)

pub mod observers;
pub mod repository;

pub use observers::{TracingObserver, WatchObserver};
pub use repository::{SeedCatalog, SeedError, SeededMetricRepository};
