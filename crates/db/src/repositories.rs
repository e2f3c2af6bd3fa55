//! PostgreSQL-backed lookups.
//!
//! The submodules hold plain query functions taking a pool; [`PgStore`] wires
//! them into the `fitdesk-core` lookup traits and converts failures into
//! [`AgendaError`] at that boundary.

pub mod appointment;
pub mod goal_config;
pub mod working_hours;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitdesk_core::{
    errors::{AgendaError, AgendaResult},
    lookup::{AppointmentLookup, GoalConfigStore, ScheduleLookup},
    models::{
        appointment::{Appointment, UserRole},
        goal::{OccupancyGoalConfig, UpdateOccupancyGoalConfig},
        schedule::WeeklySchedule,
    },
};
use uuid::Uuid;

use crate::DbPool;

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleLookup for PgStore {
    async fn get_working_hours(&self, user_id: Uuid) -> AgendaResult<Option<WeeklySchedule>> {
        working_hours::get_working_hours(&self.pool, user_id)
            .await
            .map_err(|e| AgendaError::DataUnavailable(format!("working hours: {e}")))
    }
}

#[async_trait]
impl AppointmentLookup for PgStore {
    async fn get_appointments(
        &self,
        user_id: Uuid,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
        role: UserRole,
    ) -> AgendaResult<Vec<Appointment>> {
        appointment::get_appointments_in_range(&self.pool, user_id, range_start, range_end, role)
            .await
            .map_err(|e| AgendaError::DataUnavailable(format!("appointments: {e}")))
    }
}

#[async_trait]
impl GoalConfigStore for PgStore {
    async fn get_occupancy_goal_config(&self, user_id: Uuid) -> AgendaResult<OccupancyGoalConfig> {
        Ok(goal_config::get_or_create_goal_config(&self.pool, user_id).await?)
    }

    async fn update_occupancy_goal_config(
        &self,
        user_id: Uuid,
        update: UpdateOccupancyGoalConfig,
    ) -> AgendaResult<OccupancyGoalConfig> {
        update.validate()?;
        Ok(goal_config::update_goal_config(&self.pool, user_id, &update).await?)
    }
}
