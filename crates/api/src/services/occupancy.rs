//! # Occupancy Service
//!
//! Resolves schedules, appointments and goal configs through the lookup traits
//! and hands the already-fetched data to `fitdesk_core::analytics`.
//!
//! Missing or failing upstream data never fails a request. The service
//! substitutes an empty schedule, an empty appointment list or the default
//! goal config, logs the substitution at `warn`, and returns a zeroed
//! result. The only error a caller sees from the analytics operations is an
//! inverted date range (or an oversized series request).

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use fitdesk_core::{
    analytics::{self, monthly_windows, weekly_windows},
    errors::{AgendaError, AgendaResult},
    lookup::{AppointmentLookup, GoalConfigStore, ScheduleLookup},
    models::{
        analytics::{DateRange, PeriodComparison, RevenueProjection, UtilizationSnapshot},
        appointment::{Appointment, UserRole},
        goal::{OccupancyGoalConfig, UpdateOccupancyGoalConfig},
        schedule::WeeklySchedule,
    },
};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};
use uuid::Uuid;

/// Upper bound on the number of windows in one series request.
pub const MAX_SERIES_LENGTH: u32 = 104;

pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;

#[derive(Clone)]
pub struct OccupancyService {
    schedules: Arc<dyn ScheduleLookup>,
    appointments: Arc<dyn AppointmentLookup>,
    goals: Arc<dyn GoalConfigStore>,
    fetch_concurrency: usize,
}

impl OccupancyService {
    pub fn new(
        schedules: Arc<dyn ScheduleLookup>,
        appointments: Arc<dyn AppointmentLookup>,
        goals: Arc<dyn GoalConfigStore>,
    ) -> Self {
        Self {
            schedules,
            appointments,
            goals,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    /// Bounds how many per-window appointment fetches a series runs at once.
    pub fn with_fetch_concurrency(mut self, limit: usize) -> Self {
        self.fetch_concurrency = limit.max(1);
        self
    }

    pub async fn get_utilization_snapshot(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user_id: Uuid,
        role: UserRole,
    ) -> AgendaResult<UtilizationSnapshot> {
        let range = DateRange::new(start, end)?;
        let (schedule, goal) = tokio::join!(self.load_schedule(user_id), self.load_goal(user_id));
        let appointments = self.load_appointments(user_id, &range, role).await;

        Ok(analytics::snapshot(&range, &schedule, &appointments, &goal))
    }

    pub async fn get_period_comparison(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user_id: Uuid,
        role: UserRole,
    ) -> AgendaResult<PeriodComparison> {
        let range = DateRange::new(start, end)?;
        let (schedule, goal) = tokio::join!(self.load_schedule(user_id), self.load_goal(user_id));

        let previous_appointments = async {
            match range.previous() {
                Some(previous) => self.load_appointments(user_id, &previous, role).await,
                None => Vec::new(),
            }
        };
        let (appointments, previous_appointments) = tokio::join!(
            self.load_appointments(user_id, &range, role),
            previous_appointments
        );

        let current = analytics::snapshot(&range, &schedule, &appointments, &goal);
        Ok(analytics::compare(current, &schedule, &previous_appointments, &goal))
    }

    pub async fn get_revenue_projection(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        user_id: Uuid,
        role: UserRole,
    ) -> AgendaResult<RevenueProjection> {
        let range = DateRange::new(start, end)?;
        let (schedule, goal) = tokio::join!(self.load_schedule(user_id), self.load_goal(user_id));
        let appointments = self.load_appointments(user_id, &range, role).await;

        let snapshot = analytics::snapshot(&range, &schedule, &appointments, &goal);
        Ok(analytics::project(&snapshot, &goal))
    }

    pub async fn get_weekly_series(
        &self,
        reference: NaiveDate,
        weeks: u32,
        user_id: Uuid,
        role: UserRole,
    ) -> AgendaResult<Vec<UtilizationSnapshot>> {
        check_series_length("weeks", weeks)?;
        self.series(weekly_windows(reference, weeks), user_id, role).await
    }

    pub async fn get_monthly_series(
        &self,
        reference: NaiveDate,
        months: u32,
        user_id: Uuid,
        role: UserRole,
    ) -> AgendaResult<Vec<UtilizationSnapshot>> {
        check_series_length("months", months)?;
        self.series(monthly_windows(reference, months), user_id, role).await
    }

    pub async fn get_occupancy_goal_config(
        &self,
        user_id: Uuid,
    ) -> AgendaResult<OccupancyGoalConfig> {
        self.goals.get_occupancy_goal_config(user_id).await
    }

    pub async fn update_occupancy_goal_config(
        &self,
        user_id: Uuid,
        update: UpdateOccupancyGoalConfig,
    ) -> AgendaResult<OccupancyGoalConfig> {
        update.validate()?;
        self.goals.update_occupancy_goal_config(user_id, update).await
    }

    /// Windows are independent, so their appointment fetches run concurrently
    /// up to `fetch_concurrency`; results keep window order.
    async fn series(
        &self,
        windows: Vec<DateRange>,
        user_id: Uuid,
        role: UserRole,
    ) -> AgendaResult<Vec<UtilizationSnapshot>> {
        let (schedule, goal) = tokio::join!(self.load_schedule(user_id), self.load_goal(user_id));

        let fetched: Vec<(DateRange, Vec<Appointment>)> = stream::iter(windows)
            .map(|window| async move {
                let appointments = self.load_appointments(user_id, &window, role).await;
                (window, appointments)
            })
            .buffered(self.fetch_concurrency)
            .collect()
            .await;

        Ok(fetched
            .iter()
            .map(|(window, appointments)| {
                analytics::snapshot(window, &schedule, appointments, &goal)
            })
            .collect())
    }

    async fn load_schedule(&self, user_id: Uuid) -> WeeklySchedule {
        match self.schedules.get_working_hours(user_id).await {
            Ok(Some(schedule)) => schedule,
            Ok(None) => {
                warn!(%user_id, "No working hours declared, using an empty schedule");
                WeeklySchedule::default()
            }
            Err(e) => {
                warn!(%user_id, error = %e, "Working hours lookup failed, using an empty schedule");
                WeeklySchedule::default()
            }
        }
    }

    async fn load_appointments(
        &self,
        user_id: Uuid,
        range: &DateRange,
        role: UserRole,
    ) -> Vec<Appointment> {
        match self
            .appointments
            .get_appointments(user_id, range.start_instant(), range.end_instant(), role)
            .await
        {
            Ok(appointments) => {
                debug!(
                    %user_id,
                    start = %range.start,
                    end = %range.end,
                    count = appointments.len(),
                    "Loaded appointments"
                );
                appointments
            }
            Err(e) => {
                warn!(
                    %user_id,
                    start = %range.start,
                    end = %range.end,
                    error = %e,
                    "Appointment lookup failed, treating the period as empty"
                );
                Vec::new()
            }
        }
    }

    async fn load_goal(&self, user_id: Uuid) -> OccupancyGoalConfig {
        match self.goals.get_occupancy_goal_config(user_id).await {
            Ok(config) => config,
            Err(e) => {
                warn!(%user_id, error = %e, "Goal config lookup failed, using defaults");
                OccupancyGoalConfig::default_for(user_id, Utc::now())
            }
        }
    }
}

fn check_series_length(unit: &str, count: u32) -> AgendaResult<()> {
    if count > MAX_SERIES_LENGTH {
        return Err(AgendaError::Validation(format!(
            "{unit} must be at most {MAX_SERIES_LENGTH}, got {count}"
        )));
    }
    Ok(())
}
