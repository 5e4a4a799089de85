//! Per-dataset loading/error/data slots and fetch tickets.

use super::outcome::{IgnoredReason, SelectionOutcome};
use crate::domain::foundation::{Country, Dataset, RepositoryError};
use crate::domain::records::{MetricRecord, ProblemReport, SchemeRecord};

/// Loading flag, last error and last payload for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSlot<T> {
    pub loading: bool,
    pub error: Option<RepositoryError>,
    pub data: Option<T>,
}

impl<T> Default for DatasetSlot<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
        }
    }
}

/// Payload for [`DatasetSlots::set_data`]. The variant names the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetPayload {
    Schemes(Vec<SchemeRecord>),
    Consumer(MetricRecord),
    Problems(ProblemReport),
}

impl DatasetPayload {
    pub fn dataset(&self) -> Dataset {
        match self {
            DatasetPayload::Schemes(_) => Dataset::Schemes,
            DatasetPayload::Consumer(_) => Dataset::Consumer,
            DatasetPayload::Problems(_) => Dataset::Problems,
        }
    }
}

/// The three dataset slots of a selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSlots {
    pub schemes: DatasetSlot<Vec<SchemeRecord>>,
    pub consumer: DatasetSlot<MetricRecord>,
    pub problems: DatasetSlot<ProblemReport>,
}

impl DatasetSlots {
    pub fn is_loading(&self, dataset: Dataset) -> bool {
        match dataset {
            Dataset::Schemes => self.schemes.loading,
            Dataset::Consumer => self.consumer.loading,
            Dataset::Problems => self.problems.loading,
        }
    }

    pub fn error(&self, dataset: Dataset) -> Option<&RepositoryError> {
        match dataset {
            Dataset::Schemes => self.schemes.error.as_ref(),
            Dataset::Consumer => self.consumer.error.as_ref(),
            Dataset::Problems => self.problems.error.as_ref(),
        }
    }

    pub fn has_data(&self, dataset: Dataset) -> bool {
        match dataset {
            Dataset::Schemes => self.schemes.data.is_some(),
            Dataset::Consumer => self.consumer.data.is_some(),
            Dataset::Problems => self.problems.data.is_some(),
        }
    }

    pub fn set_loading(&mut self, dataset: Dataset, loading: bool) -> SelectionOutcome {
        let flag = match dataset {
            Dataset::Schemes => &mut self.schemes.loading,
            Dataset::Consumer => &mut self.consumer.loading,
            Dataset::Problems => &mut self.problems.loading,
        };
        if *flag == loading {
            return SelectionOutcome::Ignored(IgnoredReason::Unchanged);
        }
        *flag = loading;
        SelectionOutcome::Applied
    }

    pub fn set_error(
        &mut self,
        dataset: Dataset,
        error: Option<RepositoryError>,
    ) -> SelectionOutcome {
        let slot = match dataset {
            Dataset::Schemes => &mut self.schemes.error,
            Dataset::Consumer => &mut self.consumer.error,
            Dataset::Problems => &mut self.problems.error,
        };
        if *slot == error {
            return SelectionOutcome::Ignored(IgnoredReason::Unchanged);
        }
        *slot = error;
        SelectionOutcome::Applied
    }

    /// Replaces the payload of the dataset named by `payload`.
    pub fn set_data(&mut self, payload: DatasetPayload) {
        match payload {
            DatasetPayload::Schemes(records) => self.schemes.data = Some(records),
            DatasetPayload::Consumer(record) => self.consumer.data = Some(record),
            DatasetPayload::Problems(report) => self.problems.data = Some(report),
        }
    }

    /// Drops every payload and error. Loading flags are kept so in-flight
    /// fetches still resolve their slot.
    pub fn clear_results(&mut self) {
        self.schemes.data = None;
        self.schemes.error = None;
        self.consumer.data = None;
        self.consumer.error = None;
        self.problems.data = None;
        self.problems.error = None;
    }
}

/// Identifies one issued fetch.
///
/// A result is applied only while its ticket is the latest for its dataset
/// and the primary country still equals `country`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub dataset: Dataset,
    pub country: Country,
    pub generation: u64,
}

/// Why a fetch result was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// A newer fetch for the same dataset was issued.
    Superseded,
    /// The primary country changed while the fetch was in flight.
    CountryChanged,
    /// The payload belongs to a different dataset than the ticket.
    DatasetMismatch,
    /// The store was disposed.
    Disposed,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResolution {
    Applied,
    Discarded(DiscardReason),
}

impl FetchResolution {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchResolution::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::TimeBucket;

    fn country(name: &str) -> Country {
        Country::new(name).unwrap()
    }

    #[test]
    fn slots_start_empty() {
        let slots = DatasetSlots::default();
        for dataset in Dataset::ALL {
            assert!(!slots.is_loading(dataset));
            assert!(slots.error(dataset).is_none());
            assert!(!slots.has_data(dataset));
        }
    }

    #[test]
    fn loading_touches_one_dataset_only() {
        let mut slots = DatasetSlots::default();
        assert!(slots.set_loading(Dataset::Consumer, true).is_applied());

        assert!(slots.is_loading(Dataset::Consumer));
        assert!(!slots.is_loading(Dataset::Schemes));
        assert!(!slots.is_loading(Dataset::Problems));
    }

    #[test]
    fn repeated_loading_is_unchanged() {
        let mut slots = DatasetSlots::default();
        assert_eq!(
            slots.set_loading(Dataset::Schemes, false),
            SelectionOutcome::Ignored(IgnoredReason::Unchanged)
        );
    }

    #[test]
    fn error_is_stored_per_dataset() {
        let mut slots = DatasetSlots::default();
        let error = RepositoryError::unavailable(Dataset::Problems, &country("India"), "timeout");
        assert!(slots.set_error(Dataset::Problems, Some(error.clone())).is_applied());

        assert_eq!(slots.error(Dataset::Problems), Some(&error));
        assert!(slots.error(Dataset::Consumer).is_none());
        assert!(slots.set_error(Dataset::Problems, None).is_applied());
    }

    #[test]
    fn payload_names_its_dataset() {
        let record = MetricRecord::new(country("India"), TimeBucket::Year(2023));
        let payload = DatasetPayload::Consumer(record.clone());
        assert_eq!(payload.dataset(), Dataset::Consumer);

        let mut slots = DatasetSlots::default();
        slots.set_data(payload);
        assert_eq!(slots.consumer.data, Some(record));
        assert!(!slots.has_data(Dataset::Schemes));
    }

    #[test]
    fn clear_results_keeps_loading_flags() {
        let mut slots = DatasetSlots::default();
        slots.set_data(DatasetPayload::Schemes(Vec::new()));
        slots.set_loading(Dataset::Consumer, true);
        let error = RepositoryError::unavailable(Dataset::Problems, &country("India"), "timeout");
        slots.set_error(Dataset::Problems, Some(error));

        slots.clear_results();

        assert!(!slots.has_data(Dataset::Schemes));
        assert!(slots.error(Dataset::Problems).is_none());
        assert!(slots.is_loading(Dataset::Consumer));
    }
}
