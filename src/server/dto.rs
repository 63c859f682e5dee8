//! Data Transfer Objects
//!
//! Request and response types for the development backend.

use serde::{Deserialize, Serialize};

use super::state::User;

/// POST /login
///
/// `nickname` is optional here so a missing field becomes a 400 with a
/// proper error body instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default, alias = "username")]
    pub nickname: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /users
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            nickname: user.nickname.clone(),
            email: user.email.clone(),
        }
    }
}

/// POST /messages and PUT /messages/:id
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// GET /health
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}
