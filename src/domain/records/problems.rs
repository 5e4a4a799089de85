//! Social, environmental and governance problem records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::compact_number;

/// How severe a problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// High and Critical problems are listed as priority issues.
    pub fn is_high_priority(&self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction a problem is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Improving,
    Stable,
    #[serde(alias = "Declining")]
    Worsening,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Improving => "Improving",
            Trend::Stable => "Stable",
            Trend::Worsening => "Worsening",
        };
        write!(f, "{}", s)
    }
}

/// Top-level problem domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemDomain {
    Social,
    Environmental,
    Governance,
}

impl ProblemDomain {
    pub const ALL: [ProblemDomain; 3] = [
        ProblemDomain::Social,
        ProblemDomain::Environmental,
        ProblemDomain::Governance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProblemDomain::Social => "Social",
            ProblemDomain::Environmental => "Environmental",
            ProblemDomain::Governance => "Governance",
        }
    }
}

impl fmt::Display for ProblemDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unit of an [`AffectedQuantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectedUnit {
    People,
    Percent,
}

/// How many are affected by a problem: a head count or a population share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffectedQuantity {
    pub value: f64,
    pub unit: AffectedUnit,
}

impl AffectedQuantity {
    pub fn people(count: f64) -> Self {
        Self {
            value: count,
            unit: AffectedUnit::People,
        }
    }

    pub fn percent(share: f64) -> Self {
        Self {
            value: share,
            unit: AffectedUnit::Percent,
        }
    }
}

impl fmt::Display for AffectedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            AffectedUnit::People => write!(f, "{}", compact_number(self.value)),
            AffectedUnit::Percent => write!(f, "{}%", self.value),
        }
    }
}

/// One identified problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub category: String,
    pub severity: Severity,
    pub affected: AffectedQuantity,
    pub trend: Trend,
}

impl ProblemRecord {
    pub fn new(
        category: impl Into<String>,
        severity: Severity,
        affected: AffectedQuantity,
        trend: Trend,
    ) -> Self {
        Self {
            category: category.into(),
            severity,
            affected,
            trend,
        }
    }
}

/// A problem together with the domain it was reported under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedProblem<'a> {
    pub domain: ProblemDomain,
    pub record: &'a ProblemRecord,
}

/// Problems for one country grouped by domain.
///
/// Domains the provider omits deserialize as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemReport {
    pub social: Vec<ProblemRecord>,
    pub environmental: Vec<ProblemRecord>,
    pub governance: Vec<ProblemRecord>,
}

impl ProblemReport {
    pub fn records(&self, domain: ProblemDomain) -> &[ProblemRecord] {
        match domain {
            ProblemDomain::Social => &self.social,
            ProblemDomain::Environmental => &self.environmental,
            ProblemDomain::Governance => &self.governance,
        }
    }

    pub fn count(&self, domain: ProblemDomain) -> usize {
        self.records(domain).len()
    }

    pub fn total(&self) -> usize {
        ProblemDomain::ALL.iter().map(|d| self.count(*d)).sum()
    }

    /// All problems tagged with their domain, in domain order.
    pub fn tagged(&self) -> Vec<TaggedProblem<'_>> {
        ProblemDomain::ALL
            .iter()
            .flat_map(|domain| {
                self.records(*domain).iter().map(move |record| TaggedProblem {
                    domain: *domain,
                    record,
                })
            })
            .collect()
    }
}
