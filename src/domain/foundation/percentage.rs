//! Percentage value object (0-100 scale) for scheme progress.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Whole-number percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Creates a Percentage, clamping to 100.
    pub fn saturating(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if above 100.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as an f64 on the 0-100 scale.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Classifies the percentage as scheme progress.
    pub fn band(&self) -> ProgressBand {
        match self.0 {
            80..=100 => ProgressBand::OnTrack,
            60..=79 => ProgressBand::Moderate,
            _ => ProgressBand::Lagging,
        }
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Progress classification used to colour scheme progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// 80% and above.
    OnTrack,
    /// 60% to 79%.
    Moderate,
    /// Below 60%.
    Lagging,
}
