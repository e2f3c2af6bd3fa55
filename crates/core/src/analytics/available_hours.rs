use chrono::{Datelike, NaiveDate};

use crate::models::schedule::WeeklySchedule;

/// Declared working hours on a single calendar day.
pub fn hours_on(schedule: &WeeklySchedule, date: NaiveDate) -> f64 {
    schedule
        .day(date.weekday())
        .map(|day| day.hours())
        .unwrap_or(0.0)
}

/// Sums declared working hours for every day from `start` to `end`, both
/// inclusive. An inverted range yields zero.
///
/// Ranges within a day are assumed disjoint and are not merged.
pub fn available_hours(schedule: &WeeklySchedule, start: NaiveDate, end: NaiveDate) -> f64 {
    if end < start {
        return 0.0;
    }

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| hours_on(schedule, day))
        .sum()
}
