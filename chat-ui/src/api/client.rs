//! HTTP API Client
//!
//! Functions for communicating with the chat backend.

use gloo_net::http::Request;

use crate::state::global::Message;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";

/// Placeholder todo endpoint used by the "Get" button
pub const TODOS_URL: &str = "https://jsonplaceholder.typicode.com/todos";

const API_URL_KEY: &str = "chatgate_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, &normalize_base(url));
        }
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    nickname: &'a str,
}

#[derive(serde::Serialize)]
struct MessageRequest<'a> {
    content: &'a str,
}

// ============ API Functions ============

/// Exchange a nickname for a session token
pub async fn login(nickname: &str) -> Result<String, String> {
    let response = Request::post(&format!("{}/login", get_api_base()))
        .json(&LoginRequest { nickname })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|_| "Cannot reach the server, try again".to_string())?;

    if !response.ok() {
        return Err(login_rejection(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    parse_token(&body)
}

/// Fetch all messages
pub async fn fetch_messages(token: &str) -> Result<Vec<Message>, String> {
    let response = Request::get(&format!("{}/messages", get_api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Post a message; the text goes out exactly as typed
pub async fn post_message(token: &str, content: &str) -> Result<Message, String> {
    let response = Request::post(&format!("{}/messages", get_api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .json(&MessageRequest { content })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let response = Request::get(&format!("{}/health", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("API returned {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch a few placeholder todos
pub async fn fetch_todos(limit: u32) -> Result<Vec<Todo>, String> {
    let response = Request::get(&format!("{}?_limit={}", TODOS_URL, limit))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Todo service returned {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Read a token out of a login response body.
///
/// Accepts `{"token": "..."}`, a JSON string, or a bare single-word body.
pub fn parse_token(body: &str) -> Result<String, String> {
    let trimmed = body.trim();

    let token = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("token")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| "Login response has no token".to_string())?,
        Ok(serde_json::Value::String(token)) => token,
        Ok(_) => return Err("Unexpected login response".to_string()),
        Err(_) if !trimmed.is_empty() && !trimmed.contains(char::is_whitespace) => {
            trimmed.to_string()
        }
        Err(_) => return Err("Unexpected login response".to_string()),
    };

    if token.trim().is_empty() {
        Err("Login response has an empty token".to_string())
    } else {
        Ok(token)
    }
}

fn login_rejection(status: u16) -> String {
    match status {
        400 => "Login request was invalid".to_string(),
        401 | 403 | 404 => "Login rejected: unknown or unauthorized user".to_string(),
        other => format!("Login failed (HTTP {})", other),
    }
}

async fn error_message(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body: serde_json::Value = response.json().await.unwrap_or_default();
    body.pointer("/error/message")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("API returned {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_shapes() {
        assert_eq!(parse_token(r#"{"token":"abc"}"#), Ok("abc".to_string()));
        assert_eq!(parse_token(r#""abc""#), Ok("abc".to_string()));
        assert_eq!(parse_token("eyJ.abc.def\n"), Ok("eyJ.abc.def".to_string()));
    }

    #[test]
    fn test_parse_token_rejects() {
        assert!(parse_token("").is_err());
        assert!(parse_token(r#"{"token":""}"#).is_err());
        assert!(parse_token("not a token").is_err());
        assert!(parse_token("42").is_err());
    }

    #[test]
    fn test_login_rejection_text() {
        assert_eq!(
            login_rejection(404),
            "Login rejected: unknown or unauthorized user"
        );
        assert_eq!(login_rejection(500), "Login failed (HTTP 500)");
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" http://host:8080/ "), "http://host:8080");
    }
}
