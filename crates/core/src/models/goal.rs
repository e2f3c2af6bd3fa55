use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AgendaError, AgendaResult};

pub const DEFAULT_WEEKLY_TARGET: f64 = 80.0;
pub const DEFAULT_MONTHLY_TARGET: f64 = 75.0;
pub const DEFAULT_SESSION_PRICE: f64 = 50.0;

/// Per-user occupancy targets and the price used for revenue estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyGoalConfig {
    pub user_id: Uuid,
    /// Target weekly occupancy, 0–100.
    pub weekly_target: f64,
    /// Target monthly occupancy, 0–100.
    pub monthly_target: f64,
    pub average_session_price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OccupancyGoalConfig {
    /// The configuration a user gets the first time it is read.
    pub fn default_for(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            weekly_target: DEFAULT_WEEKLY_TARGET,
            monthly_target: DEFAULT_MONTHLY_TARGET,
            average_session_price: DEFAULT_SESSION_PRICE,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOccupancyGoalConfig {
    pub weekly_target: Option<f64>,
    pub monthly_target: Option<f64>,
    pub average_session_price: Option<f64>,
    pub active: Option<bool>,
}

impl UpdateOccupancyGoalConfig {
    pub fn validate(&self) -> AgendaResult<()> {
        for (name, value) in [
            ("weekly_target", self.weekly_target),
            ("monthly_target", self.monthly_target),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    return Err(AgendaError::Validation(format!(
                        "{name} must be between 0 and 100, got {value}"
                    )));
                }
            }
        }

        if let Some(price) = self.average_session_price {
            if !price.is_finite() || price < 0.0 {
                return Err(AgendaError::Validation(format!(
                    "average_session_price must be a non-negative number, got {price}"
                )));
            }
        }

        Ok(())
    }

    /// Builds the replacement value for `current`. The stored config is never
    /// mutated in place; callers swap the returned copy in whole.
    pub fn apply(&self, current: &OccupancyGoalConfig, now: DateTime<Utc>) -> OccupancyGoalConfig {
        OccupancyGoalConfig {
            user_id: current.user_id,
            weekly_target: self.weekly_target.unwrap_or(current.weekly_target),
            monthly_target: self.monthly_target.unwrap_or(current.monthly_target),
            average_session_price: self
                .average_session_price
                .unwrap_or(current.average_session_price),
            active: self.active.unwrap_or(current.active),
            created_at: current.created_at,
            updated_at: now.max(current.updated_at),
        }
    }
}
