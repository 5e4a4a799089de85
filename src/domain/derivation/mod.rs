//! Derivation Layer - Pure transforms from records to chart-ready rows.
//!
//! Every function here is deterministic and side-effect free. Nothing in
//! this module touches the selection store or the repository.
//!
//! # Components
//!
//! - `comparison_table` - One flat row per country with every metric key
//! - `radar` - Axis rows on a shared 0-10 scale
//! - `time_series` - One row per period with a value per country or metric
//! - `category_aggregate` - `{ name, count }` rows in first-seen order
//! - `rates` - Guarded ratios (success rate, share)
//! - `problem_breakdown` / `scheme_breakdown` - View-level filters, counts and summaries

mod category_aggregate;
mod comparison_table;
mod problem_breakdown;
mod radar;
mod rates;
mod scheme_breakdown;
mod time_series;

pub use category_aggregate::{build_category_aggregate, CategoryCount};
pub use comparison_table::{build_comparison_table, ComparisonRow};
pub use problem_breakdown::{
    domain_breakdown, high_priority, severity_breakdown, DomainFilter, HIGH_PRIORITY_LIMIT,
};
pub use radar::{
    build_radar_axes, AxisSpec, Normalization, RadarAxisRow, COMPARISON_AXES, CONSUMER_AXES,
    FULL_MARK,
};
pub use rates::{compute_success_rate, format_rate, share_percent, RateError, UNDEFINED_RATE_LABEL};
pub use scheme_breakdown::{
    build_scheme_comparison, region_options, region_summary, RegionFilter, RegionSummary,
    SchemeComparisonRow, ALL_REGIONS,
};
pub use time_series::{build_time_series, SeriesKey, TimeSeriesRow};
