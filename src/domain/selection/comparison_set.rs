//! Bounded, ordered, duplicate-free set of countries under comparison.

use serde::Serialize;

use super::outcome::{IgnoredReason, SelectionOutcome};
use crate::domain::foundation::Country;

/// Comparison cap used when none is configured.
pub const DEFAULT_MAX_COMPARISON: usize = 4;

/// Countries shown side by side.
///
/// Length always stays within `1..=max`. Insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonSet {
    members: Vec<Country>,
    #[serde(skip)]
    max: usize,
}

impl ComparisonSet {
    /// Creates a set holding only `seed`. A `max` of zero is raised to one.
    pub fn seeded(seed: Country, max: usize) -> Self {
        Self {
            members: vec![seed],
            max: max.max(1),
        }
    }

    pub fn members(&self) -> &[Country] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, country: &Country) -> bool {
        self.members.contains(country)
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max
    }

    /// Whether another member could be added.
    pub fn can_add(&self) -> bool {
        !self.is_full()
    }

    /// Whether any member could be removed.
    pub fn can_remove(&self) -> bool {
        self.members.len() > 1
    }

    pub fn add(&mut self, country: Country) -> SelectionOutcome {
        if self.contains(&country) {
            return SelectionOutcome::Ignored(IgnoredReason::AlreadyPresent);
        }
        if self.is_full() {
            return SelectionOutcome::Ignored(IgnoredReason::AtCapacity);
        }
        self.members.push(country);
        SelectionOutcome::Applied
    }

    /// Removes by value. A sole member is never removed, whatever `country` is.
    pub fn remove(&mut self, country: &Country) -> SelectionOutcome {
        if !self.can_remove() {
            return SelectionOutcome::Ignored(IgnoredReason::WouldEmpty);
        }
        match self.members.iter().position(|c| c == country) {
            Some(index) => {
                self.members.remove(index);
                SelectionOutcome::Applied
            }
            None => SelectionOutcome::Ignored(IgnoredReason::NotPresent),
        }
    }

    /// Resets the set to `[seed]`.
    pub fn reseed(&mut self, seed: Country) -> SelectionOutcome {
        if self.members.len() == 1 && self.members[0] == seed {
            return SelectionOutcome::Ignored(IgnoredReason::Unchanged);
        }
        self.members = vec![seed];
        SelectionOutcome::Applied
    }
}
