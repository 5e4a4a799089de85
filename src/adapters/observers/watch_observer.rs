//! Watch Observer - Forwards store revisions to a `tokio::sync::watch` channel.
//!
//! Lets async views await "something changed" without registering a
//! synchronous callback of their own.

use tokio::sync::watch;

use crate::domain::selection::{SelectionChange, SelectionState};
use crate::ports::SelectionObserver;

/// Publishes the revision of every applied change.
#[derive(Debug)]
pub struct WatchObserver {
    sender: watch::Sender<u64>,
}

impl WatchObserver {
    /// Creates the observer and a receiver starting at `initial_revision`.
    pub fn channel(initial_revision: u64) -> (Self, watch::Receiver<u64>) {
        let (sender, receiver) = watch::channel(initial_revision);
        (Self { sender }, receiver)
    }

    /// Another receiver on the same channel.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.sender.subscribe()
    }
}

impl SelectionObserver for WatchObserver {
    fn on_selection_changed(&self, _change: &SelectionChange, state: &SelectionState) {
        // send_replace never fails, even with no receivers left.
        self.sender.send_replace(state.revision());
    }

    fn name(&self) -> &str {
        "watch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Country;
    use crate::domain::selection::SelectionStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn receiver_sees_latest_revision() {
        let mut store = SelectionStore::new(Country::new("India").unwrap(), 4);
        let (observer, mut receiver) = WatchObserver::channel(store.state().revision());
        store.subscribe(Arc::new(observer));

        store.add_to_comparison(Country::new("China").unwrap());
        store.add_to_comparison(Country::new("Japan").unwrap());

        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), 2);
    }

    #[tokio::test]
    async fn ignored_changes_do_not_wake_receivers() {
        let mut store = SelectionStore::new(Country::new("India").unwrap(), 4);
        let (observer, receiver) = WatchObserver::channel(0);
        store.subscribe(Arc::new(observer));

        store.remove_from_comparison(&Country::new("India").unwrap());

        assert!(!receiver.has_changed().unwrap());
    }
}
