//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// A country shown by the dashboard.
///
/// Opaque beyond its name: two countries are the same country when their
/// names are equal. Used as a map key throughout the derivation layer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Country(String);

impl Country {
    /// Creates a Country, returning error if the trimmed name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("country"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the country name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Country {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.0
    }
}

/// Identifies one observer registration on a selection store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Creates a new random SubscriptionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_trims_name() {
        let country = Country::new("  India ").unwrap();
        assert_eq!(country.as_str(), "India");
    }

    #[test]
    fn country_rejects_blank_name() {
        let result = Country::new("   ");
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn country_equality_is_by_name() {
        assert_eq!(Country::new("Japan").unwrap(), "Japan".parse::<Country>().unwrap());
        assert_ne!(Country::new("Japan").unwrap(), Country::new("China").unwrap());
    }

    #[test]
    fn country_serializes_as_plain_string() {
        let json = serde_json::to_string(&Country::new("Brazil").unwrap()).unwrap();
        assert_eq!(json, "\"Brazil\"");
    }

    #[test]
    fn country_deserialization_validates() {
        let ok: Country = serde_json::from_str("\"Germany\"").unwrap();
        assert_eq!(ok.as_str(), "Germany");

        let err = serde_json::from_str::<Country>("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn subscription_ids_are_unique() {
        assert_ne!(SubscriptionId::new(), SubscriptionId::new());
    }
}
