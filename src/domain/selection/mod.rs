//! Selection Module - Session-scoped selection state and its store.
//!
//! # Components
//!
//! - `SelectionStore` - Owns every mutation, notifies observers
//! - `SelectionState` - Primary country, comparison set, filters, dataset slots
//! - `ComparisonSet` - Bounded, ordered, duplicate-free country list
//! - `FetchTicket` - Tags an in-flight repository fetch so stale results are dropped

mod comparison_set;
mod events;
mod filters;
mod outcome;
mod slots;
mod state;
mod store;

pub use comparison_set::{ComparisonSet, DEFAULT_MAX_COMPARISON};
pub use events::{SelectionChange, SlotChange};
pub use filters::FilterSet;
pub use outcome::{IgnoredReason, SelectionOutcome};
pub use slots::{
    DatasetPayload, DatasetSlot, DatasetSlots, DiscardReason, FetchResolution, FetchTicket,
};
pub use state::SelectionState;
pub use store::SelectionStore;
