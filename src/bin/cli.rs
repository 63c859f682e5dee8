//! Chatgate CLI
//!
//! One-shot commands against a running chat backend:
//! - Log in and print the token
//! - List or post messages
//! - Fetch placeholder todos
//! - Check backend status

use chatgate::client::placeholder::{fetch_todos, DEFAULT_TODO_LIMIT, TODOS_URL};
use chatgate::config::generate_default_config;
use chatgate::{Backend, ClientConfig, ClientError, Credentials, HttpBackend, MessageRow, Token};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatgate-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the chatgate backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, env = "CHATGATE_API_URL", default_value = chatgate::config::DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and print the session token
    Login {
        /// Nickname of an existing user
        nickname: String,
    },

    /// List messages
    Messages {
        /// Nickname to log in as
        nickname: String,
    },

    /// Post a message
    Post {
        /// Nickname to log in as
        nickname: String,
        /// Message text, sent verbatim
        content: String,
    },

    /// Fetch placeholder todos
    Todos {
        /// Number of todos to fetch
        #[arg(short, long, default_value_t = DEFAULT_TODO_LIMIT)]
        limit: u32,
    },

    /// Show backend status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let backend = HttpBackend::new(&ClientConfig::new(cli.api_url.clone()))?;

    match cli.command {
        Commands::Login { nickname } => {
            let token = login_or_exit(&backend, &nickname).await;
            println!("{}", token.as_str());
        }

        Commands::Messages { nickname } => {
            let token = login_or_exit(&backend, &nickname).await;
            let messages = backend.fetch_messages(&token).await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&messages)?);
            } else if messages.is_empty() {
                println!("No messages yet.");
                println!();
                println!("Post the first one with:");
                println!("  chatgate-cli post {} \"siema\"", nickname);
            } else {
                println!("{:<18} {:<12} {}", "Time", "Author", "Message");
                println!("{}", "-".repeat(60));
                for row in messages.iter().map(MessageRow::from) {
                    println!("{:<18} {:<12} {}", row.timestamp, row.author, row.content);
                }
            }
        }

        Commands::Post { nickname, content } => {
            let token = login_or_exit(&backend, &nickname).await;
            match backend.post_message(&token, &content).await {
                Ok(message) => {
                    if cli.format == "json" {
                        println!("{}", serde_json::to_string_pretty(&message)?);
                    } else {
                        println!("Posted message {} as {}", message.id, message.author);
                    }
                }
                Err(e) => {
                    eprintln!("Failed to post message: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Todos { limit } => {
            let todos = fetch_todos(backend.http(), TODOS_URL, limit).await?;
            for todo in todos {
                let mark = if todo.completed { "x" } else { " " };
                println!("[{}] {:>3} {}", mark, todo.id, todo.title);
            }
        }

        Commands::Status => {
            let response = backend
                .http()
                .get(format!("{}/health", backend.base_url()))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;
                    println!("Chatgate Status");
                    println!("===============");
                    println!("Status:  {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Version: {}", health["version"].as_str().unwrap_or("unknown"));
                    println!(
                        "Uptime:  {}",
                        format_duration(health["uptime_seconds"].as_u64().unwrap_or(0))
                    );
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to chatgate API at {}", backend.base_url());
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the API server is running:");
                    eprintln!("  cargo run --bin chatgate-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, config)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", config),
            }
        }
    }

    Ok(())
}

async fn login_or_exit(backend: &HttpBackend, nickname: &str) -> Token {
    match backend.login(&Credentials::new(nickname)).await {
        Ok(token) => token,
        Err(e) => {
            eprintln!("{}", e.login_notice());
            if !matches!(e, ClientError::Rejected { .. }) {
                eprintln!("Error: {}", e);
            }
            std::process::exit(1);
        }
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
