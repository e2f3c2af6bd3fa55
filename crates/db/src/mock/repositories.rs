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
use mockall::mock;
use uuid::Uuid;

// Mock lookups for testing
mock! {
    pub ScheduleRepo {}

    #[async_trait]
    impl ScheduleLookup for ScheduleRepo {
        async fn get_working_hours(&self, user_id: Uuid) -> AgendaResult<Option<WeeklySchedule>>;
    }
}

mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentLookup for AppointmentRepo {
        async fn get_appointments(
            &self,
            user_id: Uuid,
            range_start: DateTime<Utc>,
            range_end: DateTime<Utc>,
            role: UserRole,
        ) -> AgendaResult<Vec<Appointment>>;
    }
}

mock! {
    pub GoalConfigRepo {}

    #[async_trait]
    impl GoalConfigStore for GoalConfigRepo {
        async fn get_occupancy_goal_config(
            &self,
            user_id: Uuid,
        ) -> AgendaResult<OccupancyGoalConfig>;

        async fn update_occupancy_goal_config(
            &self,
            user_id: Uuid,
            update: UpdateOccupancyGoalConfig,
        ) -> AgendaResult<OccupancyGoalConfig>;
    }
}
