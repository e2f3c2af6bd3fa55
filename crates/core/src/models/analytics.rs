use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AgendaError, AgendaResult};

/// An inclusive range of calendar days, interpreted in UTC.
///
/// Deserialization goes through [`DateRange::new`], so an inverted range is
/// rejected there as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = AgendaError;

    fn try_from(raw: RawDateRange) -> AgendaResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AgendaResult<Self> {
        if end < start {
            return Err(AgendaError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of calendar days covered, counting both ends. A range built
    /// with `end` before `start` covers no days.
    pub fn len_days(&self) -> u64 {
        let span = (self.end - self.start).num_days();
        if span < 0 { 0 } else { span as u64 + 1 }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |day| *day <= self.end)
    }

    /// Midnight UTC at the start of the first day.
    pub fn start_instant(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::MIN).and_utc()
    }

    /// Midnight UTC after the last day; the range is half-open at this instant.
    pub fn end_instant(&self) -> DateTime<Utc> {
        self.end.and_time(NaiveTime::MIN).and_utc() + chrono::Duration::days(1)
    }

    /// The range of equal length that ends the day before this one starts.
    pub fn previous(&self) -> Option<Self> {
        if self.end < self.start {
            return None;
        }
        let end = self.start.checked_sub_days(Days::new(1))?;
        let start = self.start.checked_sub_days(Days::new(self.len_days()))?;
        Some(Self { start, end })
    }

    pub fn kind(&self) -> PeriodKind {
        if self.len_days() <= 7 {
            PeriodKind::Weekly
        } else {
            PeriodKind::Monthly
        }
    }
}

/// Which occupancy target a period is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOccupancy {
    pub date: NaiveDate,
    pub available_hours: f64,
    pub worked_hours: f64,
    pub occupancy_percent: u32,
}

/// Utilization figures for one period.
///
/// `occupancy_percent` is not clamped: more worked than available hours
/// reports above 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationSnapshot {
    pub period_label: String,
    pub kind: PeriodKind,
    pub range: DateRange,
    pub period_start: DateTime<Utc>,
    /// Exclusive.
    pub period_end: DateTime<Utc>,
    pub available_hours: f64,
    pub worked_hours: f64,
    pub reserved_hours: f64,
    pub occupancy_percent: u32,
    pub total_count: u32,
    pub completed_count: u32,
    pub confirmed_count: u32,
    pub cancelled_count: u32,
    pub no_show_count: u32,
    pub estimated_revenue: f64,
    pub daily: Vec<DailyOccupancy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub current: UtilizationSnapshot,
    pub previous: UtilizationSnapshot,
    /// Difference in percentage points.
    pub occupancy_delta: i64,
    /// Change relative to the previous occupancy, in percent. Zero when the
    /// previous period had no occupancy.
    pub occupancy_delta_percent: f64,
    pub worked_hours_delta: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueProjection {
    pub period_label: String,
    pub current_occupancy: u32,
    pub goal_occupancy: f64,
    pub projected_occupancy: f64,
    pub goal_active: bool,
    pub current_revenue: f64,
    pub projected_revenue: f64,
    pub revenue_gap: f64,
    pub hours_needed: f64,
    pub sessions_needed: u32,
}
