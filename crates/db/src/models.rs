use chrono::{DateTime, Utc};
use fitdesk_core::models::{
    appointment::{Appointment, AppointmentStatus},
    goal::OccupancyGoalConfig,
    schedule::{DaySchedule, TimeRange},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWorkingHoursDay {
    pub user_id: Uuid,
    pub weekday: i16,
    pub available: bool,
    pub ranges: Json<Vec<TimeRange>>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbWorkingHoursDay> for DaySchedule {
    fn from(row: DbWorkingHoursDay) -> Self {
        DaySchedule {
            weekday: row.weekday as u8,
            available: row.available,
            ranges: row.ranges.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub trainer_id: Uuid,
    pub gym_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbAppointment {
    /// `None` when the stored status is not one the calendar knows.
    pub fn into_appointment(self) -> Option<Appointment> {
        let status = AppointmentStatus::parse(&self.status)?;
        Some(Appointment {
            id: self.id,
            trainer_id: self.trainer_id,
            start: self.start_time,
            end: self.end_time,
            status,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbOccupancyGoalConfig {
    pub user_id: Uuid,
    pub weekly_target: f64,
    pub monthly_target: f64,
    pub average_session_price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbOccupancyGoalConfig> for OccupancyGoalConfig {
    fn from(row: DbOccupancyGoalConfig) -> Self {
        OccupancyGoalConfig {
            user_id: row.user_id,
            weekly_target: row.weekly_target,
            monthly_target: row.monthly_target,
            average_session_price: row.average_session_price,
            active: row.active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
