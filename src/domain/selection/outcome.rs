//! Observable result of a selection mutation.

use serde::Serialize;
use std::fmt;

/// Why a mutation left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    /// Country is already in the comparison set.
    AlreadyPresent,
    /// Comparison set is at its configured maximum.
    AtCapacity,
    /// Removal would leave the comparison set empty.
    WouldEmpty,
    /// Country is not in the comparison set, or the tag is not active.
    NotPresent,
    /// The new value equals the current one.
    Unchanged,
    /// Country is not part of the configured catalog.
    NotInCatalog,
}

impl fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoredReason::AlreadyPresent => "already present",
            IgnoredReason::AtCapacity => "at capacity",
            IgnoredReason::WouldEmpty => "would empty the comparison set",
            IgnoredReason::NotPresent => "not present",
            IgnoredReason::Unchanged => "unchanged",
            IgnoredReason::NotInCatalog => "not in catalog",
        };
        write!(f, "{}", text)
    }
}

/// Result of a selection mutator. Guards never fail; they report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOutcome {
    Applied,
    Ignored(IgnoredReason),
}

impl SelectionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SelectionOutcome::Applied)
    }

    pub fn ignored_reason(&self) -> Option<IgnoredReason> {
        match self {
            SelectionOutcome::Applied => None,
            SelectionOutcome::Ignored(reason) => Some(*reason),
        }
    }
}
