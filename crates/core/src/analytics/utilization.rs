use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::analytics::available_hours::hours_on;
use crate::models::{
    analytics::{DailyOccupancy, DateRange, PeriodKind, UtilizationSnapshot},
    appointment::{Appointment, AppointmentStatus},
    goal::OccupancyGoalConfig,
    schedule::WeeklySchedule,
};

/// Worked hours as a whole percentage of available hours.
///
/// Rounds half away from zero (12.5 becomes 13). Zero available hours gives
/// zero; the result is never clamped at 100.
pub fn occupancy_percent(worked_hours: f64, available_hours: f64) -> u32 {
    if available_hours <= 0.0 {
        return 0;
    }
    (worked_hours / available_hours * 100.0).round().max(0.0) as u32
}

/// Human-readable name of a period.
///
/// Ranges of up to seven days are named after the ISO 8601 week of their first
/// day, e.g. `Week 42 (13 Oct)`. Longer ranges use the month of their first
/// day, e.g. `October 2026`.
pub fn period_label(range: &DateRange) -> String {
    match range.kind() {
        PeriodKind::Weekly => format!(
            "Week {} ({})",
            range.start.iso_week().week(),
            range.start.format("%d %b")
        ),
        PeriodKind::Monthly => range.start.format("%B %Y").to_string(),
    }
}

pub fn snapshot(
    range: &DateRange,
    schedule: &WeeklySchedule,
    appointments: &[Appointment],
    goal: &OccupancyGoalConfig,
) -> UtilizationSnapshot {
    snapshot_labelled(period_label(range), range, schedule, appointments, goal)
}

/// Aggregates one period.
///
/// Only appointments intersecting the range are considered; each contributes
/// its full duration. Per-day figures attribute an appointment to the day it
/// starts on, or to the first day of the range if it started earlier.
pub fn snapshot_labelled(
    label: String,
    range: &DateRange,
    schedule: &WeeklySchedule,
    appointments: &[Appointment],
    goal: &OccupancyGoalConfig,
) -> UtilizationSnapshot {
    let period_start = range.start_instant();
    let period_end = range.end_instant();

    let mut daily: BTreeMap<NaiveDate, (f64, f64)> = range
        .days()
        .map(|day| (day, (hours_on(schedule, day), 0.0)))
        .collect();

    let mut worked_hours = 0.0;
    let mut reserved_hours = 0.0;
    let mut total_count = 0;
    let mut completed_count = 0;
    let mut confirmed_count = 0;
    let mut cancelled_count = 0;
    let mut no_show_count = 0;

    for appointment in appointments
        .iter()
        .filter(|appointment| appointment.overlaps(period_start, period_end))
    {
        total_count += 1;
        let hours = appointment.hours();

        match appointment.status {
            AppointmentStatus::Completed => completed_count += 1,
            AppointmentStatus::Confirmed => confirmed_count += 1,
            AppointmentStatus::Cancelled => cancelled_count += 1,
            AppointmentStatus::NoShow => no_show_count += 1,
            AppointmentStatus::Pending | AppointmentStatus::InProgress => {}
        }

        if appointment.status.is_reserved() {
            reserved_hours += hours;
        }

        if appointment.status.is_worked() {
            worked_hours += hours;
            let day = appointment.start.date_naive().max(range.start);
            if let Some((_, worked)) = daily.get_mut(&day) {
                *worked += hours;
            }
        }
    }

    let available_hours: f64 = daily.values().map(|(available, _)| available).sum();

    let daily = daily
        .into_iter()
        .map(|(date, (available, worked))| DailyOccupancy {
            date,
            available_hours: available,
            worked_hours: worked,
            occupancy_percent: occupancy_percent(worked, available),
        })
        .collect();

    UtilizationSnapshot {
        period_label: label,
        kind: range.kind(),
        range: *range,
        period_start,
        period_end,
        available_hours,
        worked_hours,
        reserved_hours,
        occupancy_percent: occupancy_percent(worked_hours, available_hours),
        total_count,
        completed_count,
        confirmed_count,
        cancelled_count,
        no_show_count,
        estimated_revenue: completed_count as f64 * goal.average_session_price,
        daily,
    }
}
