//! Change notifications delivered to selection observers.

use serde::Serialize;

use crate::domain::foundation::{Country, Dataset};

/// What part of a dataset slot changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotChange {
    Loading,
    Error,
    Data,
    /// A fetch result was applied (data or error, and loading cleared).
    Resolved,
}

/// One applied selection mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionChange {
    PrimaryCountry { previous: Country, current: Country },
    ComparisonAdded { country: Country },
    ComparisonRemoved { country: Country },
    ComparisonReseeded { country: Country },
    Filters,
    Slot { dataset: Dataset, change: SlotChange },
}

impl SelectionChange {
    /// Short name used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SelectionChange::PrimaryCountry { .. } => "primary_country",
            SelectionChange::ComparisonAdded { .. } => "comparison_added",
            SelectionChange::ComparisonRemoved { .. } => "comparison_removed",
            SelectionChange::ComparisonReseeded { .. } => "comparison_reseeded",
            SelectionChange::Filters => "filters",
            SelectionChange::Slot { .. } => "slot",
        }
    }
}
