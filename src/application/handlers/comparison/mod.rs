//! Comparison view handler.

mod compare_countries;

pub use compare_countries::{
    CompareCountriesHandler, CompareCountriesQuery, CountryComparison, DEFAULT_TREND_YEARS,
};
