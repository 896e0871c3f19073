use crate::error::{AppError, AppResult};
use crate::gateway::types::{AuthResult, Credentials};
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};

/// Password login
///
/// ## Route
/// POST /login
///
/// ## Request
/// ```json
/// { "username": "alice", "password": "secret" }
/// ```
///
/// ## Response
/// ```json
/// { "success": true, "message": "ようこそ！aliceさん", "user_id": 7 }
/// ```
///
/// A body that isn't valid JSON, or lacks either field, is rejected here and
/// never reaches the gateway.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<Json<AuthResult>> {
    let Json(credentials) = payload?;

    if credentials.username.is_empty() {
        return Err(AppError::BadRequest("username must not be empty".to_string()));
    }

    let result = state.gateway.authenticate(&credentials).await?;

    Ok(Json(result))
}
