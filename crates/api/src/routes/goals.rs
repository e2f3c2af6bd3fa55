use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/occupancy/:user_id/goal",
        get(handlers::goals::get_goal_config).put(handlers::goals::update_goal_config),
    )
}
