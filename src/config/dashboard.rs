//! Dashboard session configuration

use serde::Deserialize;
use std::collections::HashSet;

use super::error::ValidationError;
use crate::domain::foundation::Country;
use crate::domain::selection::DEFAULT_MAX_COMPARISON;

/// Country catalog and comparison limits
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Selectable countries (comma-separated)
    #[serde(default = "default_countries")]
    pub countries: String,

    /// Primary country at session start
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Largest comparison set
    #[serde(default = "default_max_comparison")]
    pub max_comparison: usize,
}

impl DashboardConfig {
    /// Catalog entries as trimmed, non-empty names
    pub fn countries_list(&self) -> Vec<String> {
        self.countries
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Catalog as domain countries, in configured order
    pub fn catalog(&self) -> Vec<Country> {
        self.countries_list()
            .into_iter()
            .filter_map(|name| Country::new(name).ok())
            .collect()
    }

    /// The configured default primary country
    pub fn primary_country(&self) -> Result<Country, ValidationError> {
        Country::new(self.default_country.as_str()).map_err(|_| ValidationError::EmptyDefaultCountry)
    }

    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let countries = self.countries_list();
        if countries.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for name in &countries {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateCountry(name.clone()));
            }
        }

        let primary = self.primary_country()?;
        if !seen.contains(primary.as_str()) {
            return Err(ValidationError::DefaultCountryNotInCatalog(primary.to_string()));
        }

        if self.max_comparison == 0 || self.max_comparison > countries.len() {
            return Err(ValidationError::InvalidMaxComparison {
                max: self.max_comparison,
                catalog_size: countries.len(),
            });
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            countries: default_countries(),
            default_country: default_country(),
            max_comparison: default_max_comparison(),
        }
    }
}

fn default_countries() -> String {
    "India,United States,China,Brazil,Germany,Japan".to_string()
}

fn default_country() -> String {
    "India".to_string()
}

fn default_max_comparison() -> usize {
    DEFAULT_MAX_COMPARISON
}
