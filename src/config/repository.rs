//! Metric repository configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Longest simulated latency accepted
const MAX_LATENCY_MS: u64 = 10_000;

/// Seeded repository settings
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    /// Delay applied to every lookup, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,

    /// YAML seed catalog; the built-in catalog is used when unset
    pub seed_path: Option<PathBuf>,
}

impl RepositoryConfig {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Validate repository configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.simulated_latency_ms > MAX_LATENCY_MS {
            return Err(ValidationError::LatencyTooHigh {
                max_ms: MAX_LATENCY_MS,
            });
        }
        if let Some(path) = &self.seed_path {
            if path.as_os_str().is_empty() {
                return Err(ValidationError::EmptySeedPath);
            }
        }
        Ok(())
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_latency_ms(),
            seed_path: None,
        }
    }
}

fn default_latency_ms() -> u64 {
    500
}
