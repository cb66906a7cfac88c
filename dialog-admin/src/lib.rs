//! dialog-admin library - administrative settings service
//!
//! Exposes the auto-responder admin endpoint plus a health check. All admin
//! routes sit behind session authentication with an admin role check.

pub mod api;
pub mod db;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
///
/// Admin routes require an authenticated session with the admin role.
/// Health endpoint is public.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;

    // Protected routes (require authenticated admin session)
    let protected = api::auto_responder::auto_responder_routes().layer(
        middleware::from_fn_with_state(state.clone(), api::auth::auth_middleware),
    );

    // Public routes (no authentication)
    let public = api::health::health_routes();

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
