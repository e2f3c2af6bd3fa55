use chrono::{Datelike, Days, Months, NaiveDate};

use crate::analytics::utilization::snapshot;
use crate::models::{
    analytics::{DateRange, UtilizationSnapshot},
    appointment::Appointment,
    goal::OccupancyGoalConfig,
    schedule::WeeklySchedule,
};

/// `weeks` consecutive seven-day windows, oldest first, the last one ending on
/// `reference`.
pub fn weekly_windows(reference: NaiveDate, weeks: u32) -> Vec<DateRange> {
    (0..weeks)
        .rev()
        .filter_map(|i| {
            let end = reference.checked_sub_days(Days::new(7 * i as u64))?;
            let start = end.checked_sub_days(Days::new(6))?;
            Some(DateRange { start, end })
        })
        .collect()
}

/// `months` consecutive calendar months, oldest first, the last one being the
/// month containing `reference`.
pub fn monthly_windows(reference: NaiveDate, months: u32) -> Vec<DateRange> {
    let Some(first_of_reference) = reference.with_day(1) else {
        return Vec::new();
    };

    (0..months)
        .rev()
        .filter_map(|i| {
            let start = first_of_reference.checked_sub_months(Months::new(i))?;
            let end = start
                .checked_add_months(Months::new(1))?
                .checked_sub_days(Days::new(1))?;
            Some(DateRange { start, end })
        })
        .collect()
}

/// Weekly snapshots for trend charts. `appointments` may span all windows;
/// each window only sees the appointments intersecting it.
pub fn weekly_series(
    reference: NaiveDate,
    weeks: u32,
    schedule: &WeeklySchedule,
    appointments: &[Appointment],
    goal: &OccupancyGoalConfig,
) -> Vec<UtilizationSnapshot> {
    weekly_windows(reference, weeks)
        .iter()
        .map(|window| snapshot(window, schedule, appointments, goal))
        .collect()
}

pub fn monthly_series(
    reference: NaiveDate,
    months: u32,
    schedule: &WeeklySchedule,
    appointments: &[Appointment],
    goal: &OccupancyGoalConfig,
) -> Vec<UtilizationSnapshot> {
    monthly_windows(reference, months)
        .iter()
        .map(|window| snapshot(window, schedule, appointments, goal))
        .collect()
}
