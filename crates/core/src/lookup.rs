//! Data-access seams consumed by the analytics service.
//!
//! Implementations live in `fitdesk-db`; the analytics functions never call
//! these directly and only see already-resolved values.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AgendaResult;
use crate::models::{
    appointment::{Appointment, UserRole},
    goal::{OccupancyGoalConfig, UpdateOccupancyGoalConfig},
    schedule::WeeklySchedule,
};

#[async_trait]
pub trait ScheduleLookup: Send + Sync {
    /// `Ok(None)` when the user has never declared working hours.
    async fn get_working_hours(&self, user_id: Uuid) -> AgendaResult<Option<WeeklySchedule>>;
}

#[async_trait]
pub trait AppointmentLookup: Send + Sync {
    /// Appointments whose interval intersects `[range_start, range_end)`.
    async fn get_appointments(
        &self,
        user_id: Uuid,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
        role: UserRole,
    ) -> AgendaResult<Vec<Appointment>>;
}

/// Single-writer store for per-user occupancy goals.
///
/// Reads return an owned copy; writes replace the whole value and stamp a
/// fresh `updated_at`, so the last write wins.
#[async_trait]
pub trait GoalConfigStore: Send + Sync {
    /// Creates and persists the default configuration on first read.
    async fn get_occupancy_goal_config(&self, user_id: Uuid) -> AgendaResult<OccupancyGoalConfig>;

    async fn update_occupancy_goal_config(
        &self,
        user_id: Uuid,
        update: UpdateOccupancyGoalConfig,
    ) -> AgendaResult<OccupancyGoalConfig>;
}
