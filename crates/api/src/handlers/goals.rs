use axum::{
    extract::{Path, State},
    Json,
};
use fitdesk_core::models::goal::{OccupancyGoalConfig, UpdateOccupancyGoalConfig};
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

/// Returns the user's goal config, creating the default one on first access.
pub async fn get_goal_config(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<OccupancyGoalConfig>, AppError> {
    let config = state.occupancy.get_occupancy_goal_config(user_id).await?;
    Ok(Json(config))
}

pub async fn update_goal_config(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Json(update): Json<UpdateOccupancyGoalConfig>,
) -> Result<Json<OccupancyGoalConfig>, AppError> {
    let config = state
        .occupancy
        .update_occupancy_goal_config(user_id, update)
        .await?;
    Ok(Json(config))
}
