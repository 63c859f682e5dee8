//! Chatgate Terminal Client
//!
//! Interactive front end over [`ChatApp`]. While logged out every line is a
//! nickname for the login form. Once in, lines are messages unless they start
//! with a colon:
//!
//! - `:go <path>` - Switch view (`/dashboard`, `/messages`, `/preferences`)
//! - `:refresh` - Reload messages from the backend
//! - `:todos` - Fetch placeholder todos
//! - `:logout` - Drop the session
//! - `:quit` - Exit

use anyhow::Context;
use chatgate::client::placeholder::{fetch_todos, DEFAULT_TODO_LIMIT, TODOS_URL};
use chatgate::views::render;
use chatgate::{logging, ChatApp, Config, GateState, HttpBackend};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    logging::init(&config.logging);

    tracing::info!("Chatgate v{} using {}", env!("CARGO_PKG_VERSION"), config.client.base_url());

    let backend = HttpBackend::new(&config.client).context("failed to build HTTP client")?;
    let http = backend.http().clone();
    let app = ChatApp::new(backend, config.client.base_url());

    draw(&app).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end_matches(['\r', '\n']);

        if app.gate_state().await == GateState::Unauthenticated {
            if line == ":quit" {
                break;
            }
            // Failures land on the login screen as a notice
            if let Err(e) = app.login(line).await {
                tracing::debug!("Login failed: {}", e);
            }
            draw(&app).await;
            continue;
        }

        match line.split_once(' ').unwrap_or((line, "")) {
            (":quit", _) => break,
            (":logout", _) => {
                app.logout().await;
            }
            (":go", path) => {
                app.navigate(path).await;
            }
            (":refresh", _) => {
                if let Err(e) = app.refresh_messages().await {
                    tracing::warn!("Refresh failed: {}", e);
                }
            }
            (":todos", _) => match fetch_todos(&http, TODOS_URL, DEFAULT_TODO_LIMIT).await {
                Ok(todos) => {
                    for todo in todos {
                        println!("  #{} {}", todo.id, todo.title);
                    }
                }
                Err(e) => eprintln!("Todo fetch failed: {}", e),
            },
            _ => {
                app.set_draft(line).await;
                if let Err(e) = app.submit_message().await {
                    tracing::debug!("Send failed: {}", e);
                }
            }
        }

        draw(&app).await;
    }

    tracing::info!("Bye");
    Ok(())
}

async fn draw(app: &ChatApp<HttpBackend>) {
    println!();
    for line in render(&app.screen().await) {
        println!("{}", line);
    }
}
