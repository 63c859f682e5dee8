//! User Routes
//!
//! - GET /users - List users
//! - POST /users - Register a user

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::{CreateUserRequest, UserDto};
use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// GET /users
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserDto>> {
    Json(state.list_users().await)
}

/// POST /users
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let nickname = request.nickname.ok_or(ApiError::MissingField("nickname"))?;
    let user = state.register_user(nickname, request.email).await?;
    Ok((StatusCode::CREATED, Json(UserDto::from(&user))))
}
