//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MetricRepository` - Asynchronous per-country dataset provider
//! - `SelectionObserver` - Synchronous receiver of selection changes

mod metric_repository;
mod selection_observer;

pub use metric_repository::MetricRepository;
pub use selection_observer::SelectionObserver;
