//! # FitDesk API
//!
//! The API crate serves the trainer calendar's occupancy analytics over HTTP.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Services**: [`services::occupancy::OccupancyService`] fetches schedules,
//!   appointments and goal configs and runs the pure analytics from
//!   `fitdesk-core`. In-process consumers can use it directly.
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP queries into service calls
//! - **Middleware**: Error mapping shared by every endpoint
//! - **Config**: Environment-driven settings

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Cross-cutting HTTP concerns
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Data fetching and orchestration around the analytics engine
pub mod services;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::services::occupancy::OccupancyService;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub occupancy: OccupancyService,
    /// Name of the storage backend, reported by `/health`
    pub storage: &'static str,
}

/// Installs the global tracing subscriber at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the router with every endpoint attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Occupancy analytics endpoints
        .merge(routes::occupancy::routes())
        // Occupancy goal endpoints
        .merge(routes::goals::routes())
        .with_state(state)
}

/// Starts the API server
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `state` - Service and storage shared by all handlers
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| origin.parse::<axum::http::HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| eyre::eyre!("Invalid CORS origin: {}", e))?;

        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::PUT,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request tracing and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            )),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
