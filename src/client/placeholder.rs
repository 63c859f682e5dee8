//! Placeholder todo fetch
//!
//! Standalone "Get" action: pulls a few todos from JSONPlaceholder and logs
//! them. Nothing in the view state depends on it.

use reqwest::Client;
use serde::Deserialize;

use super::{ClientError, ClientResult};

pub const TODOS_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Default `_limit` query parameter
pub const DEFAULT_TODO_LIMIT: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

/// Fetch `limit` todos from `url` and log each one
pub async fn fetch_todos(client: &Client, url: &str, limit: u32) -> ClientResult<Vec<Todo>> {
    let response = client
        .get(url)
        .query(&[("_limit", limit)])
        .send()
        .await
        .map_err(ClientError::from_transport)?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), "Todo fetch failed");
        return Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    let todos: Vec<Todo> = response
        .json()
        .await
        .map_err(|e| ClientError::Malformed(e.to_string()))?;

    for todo in &todos {
        tracing::info!(id = todo.id, completed = todo.completed, "todo: {}", todo.title);
    }

    Ok(todos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_format() {
        let json = r#"[{"userId":1,"id":1,"title":"delectus aut autem","completed":false}]"#;
        let todos: Vec<Todo> = serde_json::from_str(json).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].user_id, 1);
        assert!(!todos[0].completed);
    }
}
