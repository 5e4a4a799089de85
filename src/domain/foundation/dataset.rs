//! Dataset enum naming the per-country data sets the dashboard loads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the three datasets fetched per primary country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Schemes,
    Consumer,
    Problems,
}

impl Dataset {
    /// All datasets in dashboard tab order.
    pub const ALL: [Dataset; 3] = [Dataset::Schemes, Dataset::Consumer, Dataset::Problems];

    /// Returns the lowercase key used in logs and serialized state.
    pub fn key(&self) -> &'static str {
        match self {
            Dataset::Schemes => "schemes",
            Dataset::Consumer => "consumer",
            Dataset::Problems => "problems",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Dataset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "schemes" => Ok(Dataset::Schemes),
            "consumer" => Ok(Dataset::Consumer),
            "problems" => Ok(Dataset::Problems),
            other => Err(ValidationError::invalid_format(
                "dataset",
                format!("unknown dataset '{}'", other),
            )),
        }
    }
}
