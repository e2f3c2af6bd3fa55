use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time-of-day window inside a working day, e.g. 09:00–13:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Length of the window in hours. Inverted windows count as zero.
    pub fn hours(&self) -> f64 {
        let seconds = (self.end - self.start).num_seconds();
        if seconds <= 0 {
            0.0
        } else {
            seconds as f64 / 3600.0
        }
    }
}

/// Working hours declared for one weekday.
///
/// `weekday` follows the dashboard convention: 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub weekday: u8,
    pub available: bool,
    #[serde(default)]
    pub ranges: Vec<TimeRange>,
}

impl DaySchedule {
    pub fn hours(&self) -> f64 {
        if !self.available {
            return 0.0;
        }
        self.ranges.iter().map(TimeRange::hours).sum()
    }
}

/// A trainer's recurring weekly availability.
///
/// The default value is an empty schedule, which yields zero available hours
/// for every day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub days: Vec<DaySchedule>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl WeeklySchedule {
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        let index = weekday.num_days_from_sunday() as u8;
        self.days.iter().find(|day| day.weekday == index)
    }
}
