//! Government scheme records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::compact_number;
use crate::domain::foundation::Percentage;

/// Lifecycle status of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeStatus {
    Active,
    Completed,
    Pending,
}

impl fmt::Display for SchemeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SchemeStatus::Active => "Active",
            SchemeStatus::Completed => "Completed",
            SchemeStatus::Pending => "Pending",
        };
        write!(f, "{}", s)
    }
}

/// Currency a budget is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Cny,
    Brl,
    Jpy,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Cny => "¥",
            Currency::Brl => "R$",
            Currency::Jpy => "¥",
        }
    }
}

/// Currency-tagged budget amount in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: f64,
    pub currency: Currency,
}

impl Budget {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency.symbol(), compact_number(self.amount))
    }
}

/// One government scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRecord {
    pub name: String,
    pub region: String,
    pub category: String,
    pub budget: Budget,
    pub progress: Percentage,
    pub beneficiaries: u64,
    pub status: SchemeStatus,
}

/// Scheme counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeTally {
    pub active: u64,
    pub completed: u64,
    pub pending: u64,
}

impl SchemeTally {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SchemeRecord>) -> Self {
        records
            .into_iter()
            .fold(SchemeTally::default(), |mut tally, record| {
                match record.status {
                    SchemeStatus::Active => tally.active += 1,
                    SchemeStatus::Completed => tally.completed += 1,
                    SchemeStatus::Pending => tally.pending += 1,
                }
                tally
            })
    }

    pub fn total(&self) -> u64 {
        self.active + self.completed + self.pending
    }
}
