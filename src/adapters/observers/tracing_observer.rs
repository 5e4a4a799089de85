//! Tracing Observer - Logs every applied selection change.

use tracing::{debug, info};

use crate::domain::selection::{SelectionChange, SelectionState};
use crate::ports::SelectionObserver;

/// Emits one structured log line per applied selection change.
///
/// Country and comparison changes log at `info`; dataset slot churn logs at
/// `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionObserver for TracingObserver {
    fn on_selection_changed(&self, change: &SelectionChange, state: &SelectionState) {
        let revision = state.revision();
        let primary = state.primary_country();
        let compared = state.comparison().len();

        match change {
            SelectionChange::PrimaryCountry { previous, current } => {
                info!(revision, %previous, %current, "Primary country changed");
            }
            SelectionChange::ComparisonAdded { country }
            | SelectionChange::ComparisonRemoved { country }
            | SelectionChange::ComparisonReseeded { country } => {
                info!(revision, kind = change.kind(), %country, compared, "Comparison set changed");
            }
            SelectionChange::Filters => {
                debug!(revision, %primary, filters = state.filters().len(), "Filters replaced");
            }
            SelectionChange::Slot { dataset, change } => {
                debug!(
                    revision,
                    %primary,
                    %dataset,
                    change = ?change,
                    loading = state.slots().is_loading(*dataset),
                    failed = state.slots().error(*dataset).is_some(),
                    "Dataset slot changed"
                );
            }
        }
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Country;
    use crate::domain::selection::SelectionStore;
    use std::sync::Arc;

    #[test]
    fn logs_without_touching_state() {
        let mut store = SelectionStore::new(Country::new("India").unwrap(), 4);
        store.subscribe(Arc::new(TracingObserver::new()));

        assert!(store.add_to_comparison(Country::new("Japan").unwrap()).is_applied());
        assert_eq!(store.state().comparison().len(), 2);
        assert_eq!(TracingObserver.name(), "tracing");
    }
}
