use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/occupancy/:user_id/snapshot",
            get(handlers::occupancy::get_snapshot),
        )
        .route(
            "/api/occupancy/:user_id/comparison",
            get(handlers::occupancy::get_comparison),
        )
        .route(
            "/api/occupancy/:user_id/projection",
            get(handlers::occupancy::get_projection),
        )
        .route(
            "/api/occupancy/:user_id/series/weekly",
            get(handlers::occupancy::get_weekly_series),
        )
        .route(
            "/api/occupancy/:user_id/series/monthly",
            get(handlers::occupancy::get_monthly_series),
        )
}
