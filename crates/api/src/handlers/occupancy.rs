//! # Occupancy Handlers
//!
//! Thin adapters from HTTP queries to [`OccupancyService`]. All ranges are
//! inclusive calendar days in UTC, given as `YYYY-MM-DD`.
//!
//! [`OccupancyService`]: crate::services::occupancy::OccupancyService

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use fitdesk_core::models::{
    analytics::{PeriodComparison, RevenueProjection, UtilizationSnapshot},
    appointment::UserRole,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

pub const DEFAULT_SERIES_WEEKS: u32 = 4;
pub const DEFAULT_SERIES_MONTHS: u32 = 6;

/// Query parameters for single-period endpoints
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    /// First day of the period
    pub start: NaiveDate,
    /// Last day of the period, inclusive
    pub end: NaiveDate,
    /// Whose appointments to count (default: trainer)
    pub role: Option<UserRole>,
}

/// Query parameters for series endpoints
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Day the last window ends on, or the month it falls in (default: today)
    pub reference: Option<NaiveDate>,
    pub weeks: Option<u32>,
    pub months: Option<u32>,
    pub role: Option<UserRole>,
}

impl SeriesQuery {
    fn reference(&self) -> NaiveDate {
        self.reference.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// `GET /api/occupancy/:user_id/snapshot?start=&end=`
pub async fn get_snapshot(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<UtilizationSnapshot>, AppError> {
    let snapshot = state
        .occupancy
        .get_utilization_snapshot(query.start, query.end, user_id, query.role.unwrap_or_default())
        .await?;
    Ok(Json(snapshot))
}

/// `GET /api/occupancy/:user_id/comparison?start=&end=`
pub async fn get_comparison(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<PeriodComparison>, AppError> {
    let comparison = state
        .occupancy
        .get_period_comparison(query.start, query.end, user_id, query.role.unwrap_or_default())
        .await?;
    Ok(Json(comparison))
}

/// `GET /api/occupancy/:user_id/projection?start=&end=`
pub async fn get_projection(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RevenueProjection>, AppError> {
    let projection = state
        .occupancy
        .get_revenue_projection(query.start, query.end, user_id, query.role.unwrap_or_default())
        .await?;
    Ok(Json(projection))
}

/// `GET /api/occupancy/:user_id/series/weekly?reference=&weeks=`
pub async fn get_weekly_series(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<UtilizationSnapshot>>, AppError> {
    let series = state
        .occupancy
        .get_weekly_series(
            query.reference(),
            query.weeks.unwrap_or(DEFAULT_SERIES_WEEKS),
            user_id,
            query.role.unwrap_or_default(),
        )
        .await?;
    Ok(Json(series))
}

/// `GET /api/occupancy/:user_id/series/monthly?reference=&months=`
pub async fn get_monthly_series(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<Vec<UtilizationSnapshot>>, AppError> {
    let series = state
        .occupancy
        .get_monthly_series(
            query.reference(),
            query.months.unwrap_or(DEFAULT_SERIES_MONTHS),
            user_id,
            query.role.unwrap_or_default(),
        )
        .await?;
    Ok(Json(series))
}
