//! Data Intelligence - Country analytics dashboard core
//!
//! This crate holds the state and derivation logic behind a country
//! analytics dashboard: a per-session selection store, pure derivations
//! from metric records to chart-ready rows, and the metric repository port
//! the dashboard reads from.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
