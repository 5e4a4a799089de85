//! Guarded ratio computations.
//!
//! A zero denominator is reported as [`RateError::DivisionUndefined`] and
//! rendered as [`UNDEFINED_RATE_LABEL`], never as `NaN`.

use thiserror::Error;

/// Display text for a rate that cannot be computed.
pub const UNDEFINED_RATE_LABEL: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RateError {
    #[error("rate is undefined for a zero denominator")]
    DivisionUndefined,
}

/// `part / whole * 100`.
pub fn share_percent(part: u64, whole: u64) -> Result<f64, RateError> {
    if whole == 0 {
        return Err(RateError::DivisionUndefined);
    }
    Ok(part as f64 / whole as f64 * 100.0)
}

/// Share of completed schemes among completed plus active ones.
pub fn compute_success_rate(completed: u64, active: u64) -> Result<f64, RateError> {
    let total = completed as f64 + active as f64;
    if total == 0.0 {
        return Err(RateError::DivisionUndefined);
    }
    Ok(completed as f64 / total * 100.0)
}

/// Formats a rate with one decimal, or [`UNDEFINED_RATE_LABEL`].
pub fn format_rate(rate: Result<f64, RateError>) -> String {
    match rate {
        Ok(value) => format!("{:.1}%", value),
        Err(RateError::DivisionUndefined) => UNDEFINED_RATE_LABEL.to_string(),
    }
}
