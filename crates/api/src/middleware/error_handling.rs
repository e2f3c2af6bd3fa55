//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way.
//!
//! Zeroed analytics results are not errors; only caller mistakes (inverted
//! ranges, invalid goal values) and infrastructure failures reach this layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitdesk_core::errors::AgendaError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use fitdesk_api::middleware::error_handling::AppError;
/// use fitdesk_core::models::analytics::DateRange;
/// use chrono::NaiveDate;
///
/// async fn handler(start: NaiveDate, end: NaiveDate) -> Result<Json<DateRange>, AppError> {
///     Ok(Json(DateRange::new(start, end)?))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub AgendaError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            AgendaError::NotFound(_) => StatusCode::NOT_FOUND,
            AgendaError::Validation(_) => StatusCode::BAD_REQUEST,
            AgendaError::InvalidRange { .. } => StatusCode::BAD_REQUEST,
            AgendaError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AgendaError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AgendaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Allows `?` on `AgendaResult` inside handlers.
impl From<AgendaError> for AppError {
    fn from(err: AgendaError) -> Self {
        AppError(err)
    }
}

/// Wraps an eyre report as a database failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AgendaError::Database(err))
    }
}
