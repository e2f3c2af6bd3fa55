//! # Occupancy Analytics
//!
//! Pure computations behind the calendar's occupancy dashboard:
//!
//! - **available_hours**: declared working hours over a date range
//! - **utilization**: one period's worked/reserved hours, counts and revenue
//! - **comparison**: current period against the preceding one of equal length
//! - **projection**: what it takes to reach the configured occupancy goal
//! - **series**: consecutive weekly or monthly snapshots for trend charts
//!
//! None of these functions perform I/O or fail on missing data. An empty
//! schedule or appointment list simply produces a zeroed result.

pub mod available_hours;
pub mod comparison;
pub mod projection;
pub mod series;
pub mod utilization;

pub use available_hours::{available_hours, hours_on};
pub use comparison::{
    TREND_THRESHOLD_PERCENT, classify_trend, compare, comparison_between, relative_delta,
};
pub use projection::{NOMINAL_SESSION_HOURS, project};
pub use series::{monthly_series, monthly_windows, weekly_series, weekly_windows};
pub use utilization::{occupancy_percent, period_label, snapshot, snapshot_labelled};
