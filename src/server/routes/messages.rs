//! Message Routes
//!
//! All of these require a bearer token.
//!
//! - GET /messages - List messages, ascending id
//! - POST /messages - Post as the token's user
//! - GET /messages/:id - Fetch one message
//! - PUT /messages/:id - Edit own message
//! - DELETE /messages/:id - Soft-delete own message

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::message::Message;
use crate::server::auth::AuthUser;
use crate::server::dto::MessageRequest;
use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// GET /messages
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Json<Vec<Message>> {
    Json(state.list_messages().await)
}

/// POST /messages
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    AuthUser(nickname): AuthUser,
    Json(request): Json<MessageRequest>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    let content = request.content.ok_or(ApiError::MissingField("content"))?;
    let message = state.create_message(&nickname, content).await?;
    tracing::info!(id = message.id, author = %nickname, "Message created");
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /messages/:id
pub async fn get_message(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Message>> {
    Ok(Json(state.get_message(parse_id(&id)?).await?))
}

/// PUT /messages/:id
pub async fn update_message(
    State(state): State<Arc<AppState>>,
    AuthUser(nickname): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<MessageRequest>,
) -> ApiResult<Json<Message>> {
    let id = parse_id(&id)?;
    let content = request.content.ok_or(ApiError::MissingField("content"))?;
    let message = state
        .update_message(id, &nickname, Some(content), false)
        .await?;
    Ok(Json(message))
}

/// DELETE /messages/:id
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    AuthUser(nickname): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.update_message(id, &nickname, None, true).await?;
    tracing::info!(id, author = %nickname, "Message deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Message ids are plain numbers; anything else gets a JSON 400
fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}
