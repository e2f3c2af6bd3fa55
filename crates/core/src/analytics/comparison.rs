use crate::analytics::utilization::snapshot;
use crate::models::{
    analytics::{PeriodComparison, Trend, UtilizationSnapshot},
    appointment::Appointment,
    goal::OccupancyGoalConfig,
    schedule::WeeklySchedule,
};

/// Relative occupancy change, in percent, beyond which a trend is no longer
/// stable. A fixed business rule; exactly ±5 is still stable.
pub const TREND_THRESHOLD_PERCENT: f64 = 5.0;

pub fn relative_delta(current: u32, previous: u32) -> f64 {
    if previous == 0 {
        return 0.0;
    }
    100.0 * (current as f64 - previous as f64) / previous as f64
}

pub fn classify_trend(relative_delta: f64) -> Trend {
    if relative_delta > TREND_THRESHOLD_PERCENT {
        Trend::Rising
    } else if relative_delta < -TREND_THRESHOLD_PERCENT {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

pub fn comparison_between(
    current: UtilizationSnapshot,
    previous: UtilizationSnapshot,
) -> PeriodComparison {
    let occupancy_delta_percent =
        relative_delta(current.occupancy_percent, previous.occupancy_percent);

    PeriodComparison {
        occupancy_delta: current.occupancy_percent as i64 - previous.occupancy_percent as i64,
        occupancy_delta_percent,
        worked_hours_delta: current.worked_hours - previous.worked_hours,
        trend: classify_trend(occupancy_delta_percent),
        current,
        previous,
    }
}

/// Compares `current` with the period of equal length immediately before it.
///
/// `previous_appointments` must cover the preceding range
/// ([`DateRange::previous`](crate::models::analytics::DateRange::previous));
/// anything outside it is ignored. When the preceding range is not
/// representable the previous snapshot falls back to the current range with no
/// appointments, which reads as zero occupancy.
pub fn compare(
    current: UtilizationSnapshot,
    schedule: &WeeklySchedule,
    previous_appointments: &[Appointment],
    goal: &OccupancyGoalConfig,
) -> PeriodComparison {
    let previous = match current.range.previous() {
        Some(range) => snapshot(&range, schedule, previous_appointments, goal),
        None => snapshot(&current.range, &WeeklySchedule::default(), &[], goal),
    };
    comparison_between(current, previous)
}
