//! Selection Observer Port - Receives synchronous selection-change notifications.
//!
//! Observers are called inside the mutating call, after the change has been
//! applied, with the state as it now stands. They must not call back into
//! the store that notified them.

use crate::domain::selection::{SelectionChange, SelectionState};

/// Port for views and adapters that react to selection changes.
pub trait SelectionObserver: Send + Sync {
    /// Called once per applied mutation. Ignored mutations are not reported.
    fn on_selection_changed(&self, change: &SelectionChange, state: &SelectionState);

    /// Name used in logs.
    fn name(&self) -> &str {
        "observer"
    }
}
