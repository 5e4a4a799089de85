//! GetProblemInsightsHandler - Problem analysis for the primary country.

use serde::Serialize;

use super::{loaded, InsightsError};
use crate::application::handlers::session::SharedSelectionStore;
use crate::domain::derivation::{
    domain_breakdown, high_priority, severity_breakdown, CategoryCount, DomainFilter,
    HIGH_PRIORITY_LIMIT,
};
use crate::domain::foundation::Dataset;
use crate::domain::records::{ProblemDomain, ProblemRecord};

/// Query for the problem view.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetProblemInsightsQuery {
    pub domain: DomainFilter,
}

/// A priority issue with the domain it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighPriorityIssue {
    pub domain: ProblemDomain,
    #[serde(flatten)]
    pub record: ProblemRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemInsights {
    /// Issues per domain over the whole report, filter notwithstanding.
    pub by_domain: Vec<CategoryCount>,
    /// Severity counts within the filtered domains.
    pub by_severity: Vec<CategoryCount>,
    pub high_priority: Vec<HighPriorityIssue>,
    pub total: usize,
}

pub struct GetProblemInsightsHandler {
    store: SharedSelectionStore,
}

impl GetProblemInsightsHandler {
    pub fn new(store: SharedSelectionStore) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetProblemInsightsQuery,
    ) -> Result<ProblemInsights, InsightsError> {
        let report = {
            let store = self.store.lock().await;
            loaded(Dataset::Problems, &store.state().slots().problems)?
        };

        let selected = query.domain.select(&report);
        let high_priority = high_priority(&selected, HIGH_PRIORITY_LIMIT)
            .into_iter()
            .map(|tagged| HighPriorityIssue {
                domain: tagged.domain,
                record: tagged.record.clone(),
            })
            .collect();

        Ok(ProblemInsights {
            by_domain: domain_breakdown(&report),
            by_severity: severity_breakdown(&selected),
            high_priority,
            total: selected.len(),
        })
    }
}
