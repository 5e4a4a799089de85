//! Session-scoped selection store.
//!
//! The store owns every mutation of [`SelectionState`]. Each mutator returns
//! a [`SelectionOutcome`]; applied mutations bump the revision and notify
//! every subscribed observer synchronously, in subscription order.
//!
//! Repository fetches go through [`SelectionStore::begin_fetch`] and
//! [`SelectionStore::complete_fetch`] so that a late result for a superseded
//! request, or for a country that is no longer primary, is discarded.

use std::collections::HashMap;
use std::sync::Arc;

use super::events::{SelectionChange, SlotChange};
use super::filters::FilterSet;
use super::outcome::{IgnoredReason, SelectionOutcome};
use super::slots::{DatasetPayload, DiscardReason, FetchResolution, FetchTicket};
use super::state::SelectionState;
use crate::domain::foundation::{Country, Dataset, RepositoryError, SubscriptionId};
use crate::ports::SelectionObserver;

pub struct SelectionStore {
    state: SelectionState,
    catalog: Vec<Country>,
    observers: Vec<(SubscriptionId, Arc<dyn SelectionObserver>)>,
    generations: HashMap<Dataset, u64>,
    disposed: bool,
}

impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionStore")
            .field("state", &self.state)
            .field("catalog", &self.catalog)
            .field("observers", &self.observers.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl SelectionStore {
    pub fn new(primary: Country, max_comparison: usize) -> Self {
        Self {
            state: SelectionState::new(primary, max_comparison),
            catalog: Vec::new(),
            observers: Vec::new(),
            generations: HashMap::new(),
            disposed: false,
        }
    }

    /// Sets the countries offered for comparison.
    pub fn with_catalog(mut self, catalog: Vec<Country>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &[Country] {
        &self.catalog
    }

    // ─────────────────────────────────────────────────────────────────────
    // Subscription
    // ─────────────────────────────────────────────────────────────────────

    pub fn subscribe(&mut self, observer: Arc<dyn SelectionObserver>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.observers.push((id, observer));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Ends the session: drops all observers and refuses later fetch results.
    pub fn dispose(&mut self) {
        self.observers.clear();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // ─────────────────────────────────────────────────────────────────────
    // Country selection
    // ─────────────────────────────────────────────────────────────────────

    /// Whether `country` may be selected. Any country is when no catalog
    /// is configured.
    pub fn in_catalog(&self, country: &Country) -> bool {
        self.catalog.is_empty() || self.catalog.contains(country)
    }

    /// Replaces the primary country. Leaves the comparison set alone.
    ///
    /// Loaded data and errors belong to the previous country and are dropped;
    /// slots stay empty until the datasets are fetched for the new one.
    pub fn set_primary_country(&mut self, country: Country) -> SelectionOutcome {
        if !self.in_catalog(&country) {
            return SelectionOutcome::Ignored(IgnoredReason::NotInCatalog);
        }
        if self.state.primary_country == country {
            return SelectionOutcome::Ignored(IgnoredReason::Unchanged);
        }
        let previous = std::mem::replace(&mut self.state.primary_country, country.clone());
        self.state.slots.clear_results();
        self.notify(SelectionChange::PrimaryCountry {
            previous,
            current: country,
        });
        SelectionOutcome::Applied
    }

    pub fn add_to_comparison(&mut self, country: Country) -> SelectionOutcome {
        if !self.in_catalog(&country) {
            return SelectionOutcome::Ignored(IgnoredReason::NotInCatalog);
        }
        let outcome = self.state.comparison.add(country.clone());
        if outcome.is_applied() {
            self.notify(SelectionChange::ComparisonAdded { country });
        }
        outcome
    }

    pub fn remove_from_comparison(&mut self, country: &Country) -> SelectionOutcome {
        let outcome = self.state.comparison.remove(country);
        if outcome.is_applied() {
            self.notify(SelectionChange::ComparisonRemoved {
                country: country.clone(),
            });
        }
        outcome
    }

    /// Resets the comparison set to `[primary]`.
    pub fn reseed_comparison(&mut self) -> SelectionOutcome {
        let primary = self.state.primary_country.clone();
        let outcome = self.state.comparison.reseed(primary.clone());
        if outcome.is_applied() {
            self.notify(SelectionChange::ComparisonReseeded { country: primary });
        }
        outcome
    }

    pub fn can_add_to_comparison(&self, country: &Country) -> bool {
        self.in_catalog(country)
            && !self.state.comparison.contains(country)
            && self.state.comparison.can_add()
    }

    pub fn can_remove_from_comparison(&self) -> bool {
        self.state.comparison.can_remove()
    }

    /// Catalog countries not yet in the comparison set, in catalog order.
    pub fn available_for_comparison(&self) -> Vec<Country> {
        self.catalog
            .iter()
            .filter(|c| !self.state.comparison.contains(c))
            .cloned()
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────

    /// Replaces the filter set wholesale.
    pub fn set_filters(&mut self, filters: FilterSet) -> SelectionOutcome {
        if self.state.filters == filters {
            return SelectionOutcome::Ignored(IgnoredReason::Unchanged);
        }
        self.state.filters = filters;
        self.notify(SelectionChange::Filters);
        SelectionOutcome::Applied
    }

    pub fn remove_filter(&mut self, tag: &str) -> SelectionOutcome {
        if !self.state.filters.remove(tag) {
            return SelectionOutcome::Ignored(IgnoredReason::NotPresent);
        }
        self.notify(SelectionChange::Filters);
        SelectionOutcome::Applied
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dataset slots
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_loading(&mut self, dataset: Dataset, loading: bool) -> SelectionOutcome {
        let outcome = self.state.slots.set_loading(dataset, loading);
        if outcome.is_applied() {
            self.notify_slot(dataset, SlotChange::Loading);
        }
        outcome
    }

    pub fn set_error(
        &mut self,
        dataset: Dataset,
        error: Option<RepositoryError>,
    ) -> SelectionOutcome {
        let outcome = self.state.slots.set_error(dataset, error);
        if outcome.is_applied() {
            self.notify_slot(dataset, SlotChange::Error);
        }
        outcome
    }

    /// Replaces the data of the dataset named by the payload.
    pub fn set_data(&mut self, payload: DatasetPayload) -> SelectionOutcome {
        let dataset = payload.dataset();
        self.state.slots.set_data(payload);
        self.notify_slot(dataset, SlotChange::Data);
        SelectionOutcome::Applied
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fetch discipline
    // ─────────────────────────────────────────────────────────────────────

    /// Issues a ticket for a fetch keyed by the current primary country and
    /// marks the dataset as loading. Any earlier ticket for the same dataset
    /// is superseded.
    pub fn begin_fetch(&mut self, dataset: Dataset) -> FetchTicket {
        let generation = self.generations.entry(dataset).or_insert(0);
        *generation += 1;
        let ticket = FetchTicket {
            dataset,
            country: self.state.primary_country.clone(),
            generation: *generation,
        };

        let loading = self.state.slots.set_loading(dataset, true);
        let cleared = self.state.slots.set_error(dataset, None);
        if loading.is_applied() || cleared.is_applied() {
            self.notify_slot(dataset, SlotChange::Loading);
        }
        ticket
    }

    /// Whether `ticket` is the latest one for its dataset.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.generations.get(&ticket.dataset).copied() == Some(ticket.generation)
    }

    /// Applies a fetch result if its ticket is still valid.
    ///
    /// When the primary country changed and no newer fetch was issued, the
    /// loading flag is cleared so the slot does not stay loading forever.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<DatasetPayload, RepositoryError>,
    ) -> FetchResolution {
        if self.disposed {
            return FetchResolution::Discarded(DiscardReason::Disposed);
        }
        if !self.is_current(ticket) {
            return FetchResolution::Discarded(DiscardReason::Superseded);
        }
        if self.state.primary_country != ticket.country {
            if self.state.slots.set_loading(ticket.dataset, false).is_applied() {
                self.notify_slot(ticket.dataset, SlotChange::Loading);
            }
            return FetchResolution::Discarded(DiscardReason::CountryChanged);
        }

        match result {
            Ok(payload) => {
                if payload.dataset() != ticket.dataset {
                    return FetchResolution::Discarded(DiscardReason::DatasetMismatch);
                }
                self.state.slots.set_data(payload);
                self.state.slots.set_error(ticket.dataset, None);
            }
            Err(error) => {
                self.state.slots.set_error(ticket.dataset, Some(error));
            }
        }
        self.state.slots.set_loading(ticket.dataset, false);
        self.notify_slot(ticket.dataset, SlotChange::Resolved);
        FetchResolution::Applied
    }

    fn notify_slot(&mut self, dataset: Dataset, change: SlotChange) {
        self.notify(SelectionChange::Slot { dataset, change });
    }

    fn notify(&mut self, change: SelectionChange) {
        self.state.revision += 1;
        for (_, observer) in &self.observers {
            observer.on_selection_changed(&change, &self.state);
        }
    }
}
