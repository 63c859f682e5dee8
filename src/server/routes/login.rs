//! Login Route
//!
//! - POST /login - Exchange a nickname for a session token

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::server::dto::{LoginRequest, LoginResponse};
use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// POST /login
///
/// 400 when `nickname` is missing, 404 when no such user exists.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let nickname = request.nickname.ok_or(ApiError::MissingField("nickname"))?;
    let token = state.issue_token(&nickname).await?;
    Ok(Json(LoginResponse { token }))
}
