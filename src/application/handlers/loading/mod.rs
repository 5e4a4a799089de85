//! Dataset loading handlers.

mod load_dashboard;
mod load_dataset;

pub use load_dashboard::{LoadDashboardHandler, LoadDashboardResult};
pub use load_dataset::{LoadDatasetCommand, LoadDatasetHandler, LoadDatasetResult};
