//! # Timetable API
//!
//! The API crate serves the class timetable to a rendering layer as JSON.
//! All endpoints are read-only views over a [`SessionRepository`].
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn stored sessions into grid and list views
//! - **Middleware**: Error mapping shared by every handler
//! - **Config**: Handle environment and application configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers for sessions and timetable views
pub mod handlers;
/// Error handling shared across handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use timetable_core::grid::GridDefinition;
use timetable_store::SessionRepository;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Where sessions come from
    pub sessions: Arc<dyn SessionRepository>,
    /// Shape of the weekly grid served by `/api/timetable/weekly`
    pub grid: GridDefinition,
}

impl ApiState {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            sessions,
            grid: GridDefinition::default(),
        }
    }
}

/// Builds the application router with all routes attached to `state`
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Session listing endpoints
        .merge(routes::session::routes())
        // Weekly, daily and upcoming views
        .merge(routes::timetable::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and session store
///
/// Installs the tracing subscriber, applies CORS and timeout layers, and
/// serves until the listener fails.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use timetable_api::{config::ApiConfig, start_server};
/// use timetable_store::InMemorySessionRepository;
///
/// # async fn run() -> eyre::Result<()> {
/// let config = ApiConfig::from_env()?;
/// start_server(config, Arc::new(InMemorySessionRepository::with_catalog())).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    sessions: Arc<dyn SessionRepository>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(sessions));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
