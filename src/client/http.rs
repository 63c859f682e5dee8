//! HTTP Backend Client
//!
//! reqwest-based implementation of [`Backend`] for the chat REST API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::message::Message;
use crate::session::Token;

use super::{Backend, ClientError, ClientResult, Credentials};

/// Chat backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the backend described by `config`
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Underlying HTTP client, shared with the placeholder fetch
    pub fn http(&self) -> &Client {
        &self.client
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&Token>,
        body: &T,
    ) -> ClientResult<Response> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, token.bearer());
        }
        let response = request.send().await.map_err(ClientError::from_transport)?;
        check_status(response).await
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> ClientResult<Token> {
        tracing::debug!(nickname = %credentials.nickname, "POST /login");

        let response = self.post_json("/login", None, credentials).await?;
        let body = response.text().await.map_err(ClientError::from_transport)?;

        parse_token(&body)
    }

    async fn fetch_messages(&self, token: &Token) -> ClientResult<Vec<Message>> {
        tracing::debug!("GET /messages");

        let response = self
            .client
            .get(self.url("/messages"))
            .header(reqwest::header::AUTHORIZATION, token.bearer())
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Malformed(e.to_string()))
    }

    async fn post_message(&self, token: &Token, content: &str) -> ClientResult<Message> {
        #[derive(Serialize)]
        struct PostMessageRequest<'a> {
            content: &'a str,
        }

        tracing::debug!(len = content.len(), "POST /messages");

        let response = self
            .post_json("/messages", Some(token), &PostMessageRequest { content })
            .await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Malformed(e.to_string()))
    }
}

/// Turn a non-success response into [`ClientError::Rejected`]
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message: rejection_message(&text),
    })
}

/// Read a token out of a login response body.
///
/// Accepted: `{"token": "..."}`, a JSON string, or a bare single-word body
/// (a raw JWT). Anything else is malformed.
pub fn parse_token(body: &str) -> ClientResult<Token> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Malformed("empty login response".to_string()));
    }

    let raw = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => match map.get("token") {
            Some(serde_json::Value::String(token)) => token.clone(),
            _ => return Err(ClientError::Malformed("missing token field".to_string())),
        },
        Ok(serde_json::Value::String(token)) => token,
        Ok(other) => {
            return Err(ClientError::Malformed(format!(
                "unexpected login response: {}",
                other
            )))
        }
        Err(_) if !trimmed.contains(char::is_whitespace) => trimmed.to_string(),
        Err(_) => return Err(ClientError::Malformed("login response is not a token".to_string())),
    };

    Token::new(raw).ok_or_else(|| ClientError::Malformed("empty token".to_string()))
}

/// Best-effort human message from an error body
fn rejection_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let message = value
            .pointer("/error/message")
            .or_else(|| value.get("exceptionMessage"))
            .or_else(|| value.get("error"))
            .and_then(|v| v.as_str());
        if let Some(message) = message {
            return message.to_string();
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_object() {
        let token = parse_token(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn test_parse_token_json_string() {
        let token = parse_token(r#""abc""#).unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn test_parse_token_bare_jwt() {
        let jwt = "eyJhbGciOiJIUzI1NiJ9.eyJuaWNrbmFtZSI6Ikt1YmEifQ.c2ln\n";
        let token = parse_token(jwt).unwrap();
        assert_eq!(token.as_str(), jwt.trim());
    }

    #[test]
    fn test_parse_token_malformed() {
        for body in [
            "",
            "   ",
            r#"{"responseCode": 404}"#,
            r#"{"token": 12}"#,
            r#"{"token": ""}"#,
            "42",
            "null",
            "<html><body>oops</body></html>",
        ] {
            let result = parse_token(body);
            assert!(
                matches!(result, Err(ClientError::Malformed(_))),
                "body {:?} should be malformed",
                body
            );
        }
    }

    #[test]
    fn test_rejection_message_shapes() {
        assert_eq!(
            rejection_message(r#"{"error":{"code":"NOT_FOUND","message":"User not found"},"request_id":"x"}"#),
            "User not found"
        );
        assert_eq!(
            rejection_message(r#"{"responseCode":401,"exceptionMessage":"Invalid JWT"}"#),
            "Invalid JWT"
        );
        assert_eq!(rejection_message("  plain text \n"), "plain text");
    }

    #[test]
    fn test_base_url_normalized() {
        let backend = HttpBackend::new(&ClientConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:3000");
        assert_eq!(backend.url("/login"), "http://localhost:3000/login");
    }
}
