//! Read-only view of the current selection.

use super::comparison_set::ComparisonSet;
use super::filters::FilterSet;
use super::slots::DatasetSlots;
use crate::domain::foundation::Country;

/// Primary country, comparison set, filters and dataset slots.
///
/// Only [`super::SelectionStore`] mutates this; everyone else reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub(super) primary_country: Country,
    pub(super) comparison: ComparisonSet,
    pub(super) filters: FilterSet,
    pub(super) slots: DatasetSlots,
    pub(super) revision: u64,
}

impl SelectionState {
    /// Fresh session state: comparison set seeded from `primary`, no filters,
    /// empty slots.
    pub fn new(primary: Country, max_comparison: usize) -> Self {
        Self {
            comparison: ComparisonSet::seeded(primary.clone(), max_comparison),
            primary_country: primary,
            filters: FilterSet::new(),
            slots: DatasetSlots::default(),
            revision: 0,
        }
    }

    pub fn primary_country(&self) -> &Country {
        &self.primary_country
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    /// Compared countries in selection order.
    pub fn comparison_countries(&self) -> &[Country] {
        self.comparison.members()
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn slots(&self) -> &DatasetSlots {
        &self.slots
    }

    /// Number of applied mutations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
