//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chat client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the chat backend
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Default backend address (local loopback)
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Create a client config pointing at the given backend
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

/// Development backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Nicknames registered at startup so they can log in right away
    #[serde(default = "default_seed_users")]
    pub seed_users: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_seed_users() -> Vec<String> {
    vec!["Michal".to_string(), "Kuba".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_users: default_seed_users(),
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("chatgate").join("config.toml")),
            Some(PathBuf::from("/etc/chatgate/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Client overrides
        if let Some(url) = var("CHATGATE_API_URL") {
            self.client.api_url = url;
        }
        if let Some(timeout) = var("CHATGATE_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.client.request_timeout_secs = secs;
            }
        }

        // Server overrides
        if let Some(host) = var("CHATGATE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("CHATGATE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(users) = var("CHATGATE_SEED_USERS") {
            self.server.seed_users = users
                .split(',')
                .map(str::trim)
                .filter(|nick| !nick.is_empty())
                .map(String::from)
                .collect();
        }

        // Logging overrides
        if let Some(level) = var("CHATGATE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("CHATGATE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Chatgate Configuration
#
# Environment variables override these settings:
# - CHATGATE_API_URL
# - CHATGATE_REQUEST_TIMEOUT_SECS
# - CHATGATE_HOST
# - CHATGATE_PORT
# - CHATGATE_SEED_USERS (comma separated)
# - CHATGATE_LOG_LEVEL
# - CHATGATE_LOG_FORMAT

[client]
# Chat backend base URL
api_url = "http://127.0.0.1:8080"

# Request timeout in seconds
request_timeout_secs = 10

[server]
# Development backend host
host = "127.0.0.1"

# Development backend port
port = 8080

# Users that exist at startup
seed_users = ["Michal", "Kuba"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.client.api_url, DEFAULT_API_URL);
        assert_eq!(config.client.request_timeout_secs, 10);
        assert_eq!(config.server.addr(), "127.0.0.1:8080");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.client.api_url, DEFAULT_API_URL);
        assert_eq!(config.server.seed_users, vec!["Michal", "Kuba"]);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[client]\napi_url = \"http://chat.local:3000/\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.client.base_url(), "http://chat.local:3000");
        assert_eq!(config.client.request_timeout_secs, 10);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[client\napi_url = 1").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CHATGATE_API_URL", "http://10.0.0.2:9000"),
            ("CHATGATE_PORT", "not-a-port"),
            ("CHATGATE_SEED_USERS", "Ala, ,Ola"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.client.api_url, "http://10.0.0.2:9000");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.seed_users, vec!["Ala", "Ola"]);
    }
}
