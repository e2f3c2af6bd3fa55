//! In-process storage used when no database is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fitdesk_core::{
    errors::AgendaResult,
    lookup::{AppointmentLookup, GoalConfigStore, ScheduleLookup},
    models::{
        appointment::{Appointment, UserRole},
        goal::{OccupancyGoalConfig, UpdateOccupancyGoalConfig},
        schedule::WeeklySchedule,
    },
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredAppointment {
    gym_id: Option<Uuid>,
    appointment: Appointment,
}

/// Keeps schedules, appointments and goal configs behind async locks.
///
/// Goal configs are replaced whole under the write lock and handed out as
/// clones, so a reader never observes a half-applied update.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    schedules: RwLock<HashMap<Uuid, WeeklySchedule>>,
    appointments: RwLock<Vec<StoredAppointment>>,
    goal_configs: RwLock<HashMap<Uuid, OccupancyGoalConfig>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put_schedule(&self, user_id: Uuid, schedule: WeeklySchedule) {
        self.schedules.write().await.insert(user_id, schedule);
    }

    pub async fn add_appointment(&self, appointment: Appointment, gym_id: Option<Uuid>) {
        self.appointments
            .write()
            .await
            .push(StoredAppointment { gym_id, appointment });
    }
}

#[async_trait]
impl ScheduleLookup for InMemoryStore {
    async fn get_working_hours(&self, user_id: Uuid) -> AgendaResult<Option<WeeklySchedule>> {
        Ok(self.schedules.read().await.get(&user_id).cloned())
    }
}

#[async_trait]
impl AppointmentLookup for InMemoryStore {
    async fn get_appointments(
        &self,
        user_id: Uuid,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
        role: UserRole,
    ) -> AgendaResult<Vec<Appointment>> {
        let appointments = self.appointments.read().await;
        let mut matching: Vec<Appointment> = appointments
            .iter()
            .filter(|stored| match role {
                UserRole::Trainer => stored.appointment.trainer_id == user_id,
                UserRole::Gym => stored.gym_id == Some(user_id),
            })
            .filter(|stored| stored.appointment.overlaps(range_start, range_end))
            .map(|stored| stored.appointment.clone())
            .collect();
        matching.sort_by_key(|appointment| appointment.start);
        Ok(matching)
    }
}

#[async_trait]
impl GoalConfigStore for InMemoryStore {
    async fn get_occupancy_goal_config(&self, user_id: Uuid) -> AgendaResult<OccupancyGoalConfig> {
        if let Some(config) = self.goal_configs.read().await.get(&user_id) {
            return Ok(config.clone());
        }

        let mut configs = self.goal_configs.write().await;
        let config = configs.entry(user_id).or_insert_with(|| {
            tracing::info!("Created default occupancy goal config for user: {}", user_id);
            OccupancyGoalConfig::default_for(user_id, Utc::now())
        });
        Ok(config.clone())
    }

    async fn update_occupancy_goal_config(
        &self,
        user_id: Uuid,
        update: UpdateOccupancyGoalConfig,
    ) -> AgendaResult<OccupancyGoalConfig> {
        update.validate()?;

        let mut configs = self.goal_configs.write().await;
        let now = Utc::now();
        let current = configs
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| OccupancyGoalConfig::default_for(user_id, now));
        let updated = update.apply(&current, now);
        configs.insert(user_id, updated.clone());

        tracing::info!("Updated occupancy goal config for user: {}", user_id);
        Ok(updated)
    }
}
