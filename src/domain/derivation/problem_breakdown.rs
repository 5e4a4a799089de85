//! Problem-analysis derivations: domain filter, domain and severity counts,
//! and the high-priority issue list.

use serde::{Deserialize, Serialize};

use super::category_aggregate::{build_category_aggregate, CategoryCount};
use crate::domain::records::{ProblemDomain, ProblemReport, TaggedProblem};

/// Number of entries shown in the high-priority issue list.
pub const HIGH_PRIORITY_LIMIT: usize = 5;

/// Which problem domains a view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainFilter {
    #[default]
    All,
    Only(ProblemDomain),
}

impl DomainFilter {
    pub fn select<'a>(&self, report: &'a ProblemReport) -> Vec<TaggedProblem<'a>> {
        match self {
            DomainFilter::All => report.tagged(),
            DomainFilter::Only(domain) => report
                .records(*domain)
                .iter()
                .map(|record| TaggedProblem {
                    domain: *domain,
                    record,
                })
                .collect(),
        }
    }
}

/// Issue count per domain, always in Social, Environmental, Governance
/// order and including domains with no issues.
pub fn domain_breakdown(report: &ProblemReport) -> Vec<CategoryCount> {
    ProblemDomain::ALL
        .iter()
        .map(|domain| CategoryCount::new(domain.label(), report.count(*domain)))
        .collect()
}

/// Issue count per severity level, in first-seen order.
pub fn severity_breakdown(problems: &[TaggedProblem<'_>]) -> Vec<CategoryCount> {
    build_category_aggregate(problems.iter(), |p| p.record.severity.label())
}

/// First `limit` problems with High or Critical severity, in input order.
pub fn high_priority<'a>(problems: &[TaggedProblem<'a>], limit: usize) -> Vec<TaggedProblem<'a>> {
    problems
        .iter()
        .filter(|p| p.record.severity.is_high_priority())
        .take(limit)
        .copied()
        .collect()
}
