//! # Health Check Handler
//!
//! Reports whether the user record store answers a count query.
//! Used by load balancers and monitoring systems.

use crate::gateway::types::HealthStatus;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// { "status": "healthy", "database": "connected", "users_count": 42 }
/// ```
/// or, when the store can't be reached:
/// ```json
/// { "status": "unhealthy", "database": "disconnected", "error": "..." }
/// ```
///
/// ## Why not return AppResult?
/// A store outage is the thing being reported, not a failure of this
/// handler, so it always answers 200 OK.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.gateway.health_check().await)
}
