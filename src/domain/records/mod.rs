//! Records returned by the metric repository.
//!
//! Records are created fresh on every fetch and never mutated afterwards;
//! they carry no identity beyond field equality.

mod metric;
mod problems;
mod schemes;

pub use metric::{resolve_metric, MetricKey, MetricRecord, TimeBucket, MISSING_METRIC_VALUE};
pub use problems::{
    AffectedQuantity, AffectedUnit, ProblemDomain, ProblemRecord, ProblemReport, Severity,
    TaggedProblem, Trend,
};
pub use schemes::{Budget, Currency, SchemeRecord, SchemeStatus, SchemeTally};

/// Formats a magnitude as `45M`, `2.5B`, `900`.
pub(crate) fn compact_number(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else {
        (value, "")
    };

    let mut digits = format!("{:.1}", scaled);
    if digits.ends_with(".0") {
        digits.truncate(digits.len() - 2);
    }
    format!("{}{}", digits, suffix)
}

#[cfg(test)]
mod tests {
    use super::compact_number;

    #[test]
    fn compact_number_scales() {
        assert_eq!(compact_number(780_000_000.0), "780M");
        assert_eq!(compact_number(1_200_000_000.0), "1.2B");
        assert_eq!(compact_number(15_500.0), "15.5K");
        assert_eq!(compact_number(42.0), "42");
    }
}
