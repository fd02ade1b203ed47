//! # Trainbook API
//!
//! The API crate provides the web server for the trainbook appointment
//! service. It exposes endpoints for listing a trainer's open slots, listing
//! a trainer's booked appointments, and booking a new appointment.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Bind transport requests and call into the slot calendar
//! - **Middleware**: Map scheduling errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. All scheduling state lives in a
//! single in-memory [`SlotCalendar`](trainbook_core::SlotCalendar) seeded
//! from a JSON file at startup and shared behind a read-write lock.

/// Configuration module for API settings
pub mod config;
/// Request handlers that call into the slot calendar
pub mod handlers;
/// Middleware for error mapping
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use trainbook_store::SharedCalendar;

/// Upper bound on request body size. Booking payloads are a handful of
/// fields; anything bigger is noise.
const MAX_BODY_BYTES: usize = 1024;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// The one in-memory slot calendar, behind a read-write lock
    pub calendar: SharedCalendar,
}

/// Starts the API server with the provided configuration and calendar
///
/// This function initializes logging, sets up the router and its middleware
/// stack, and serves HTTP until the process is stopped.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `calendar` - Shared calendar handle produced by the store crate
///
/// # Errors
///
/// Returns an error if the tracing subscriber cannot be installed or the
/// listen address cannot be bound.
pub async fn start_server(config: config::ApiConfig, calendar: SharedCalendar) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState { calendar });

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect::<Vec<_>>(),
            );

        app.layer(cors)
    } else {
        app
    };

    // Request logging, timeout, and body size cap
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the application router with all routes attached to `state`.
///
/// Split out of [`start_server`] so tests can drive the exact production
/// routing stack without binding a socket.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Scheduled appointments and booking endpoints
        .merge(routes::schedule::routes())
        // Open slot lookup endpoints
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state)
}
