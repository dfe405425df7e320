//! deskctl - command-line client for the Cafenet support-desk admin panel.
//!
//! Logs in against the admin API, keeps the issued access token in the
//! user's data directory, and shows the ticket dashboard.

mod api;
mod app;
mod auth;
mod config;
mod models;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::{App, AppState};
use auth::TokenStore;
use config::Config;

/// Application name used for the data directory path
const APP_NAME: &str = "deskctl";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("deskctl starting");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("tickets").to_string();
    let filter = args.get(2).cloned();

    let config = Config::from_env();
    let tokens = TokenStore::new(data_dir());
    let mut app = App::new(config, tokens)?;

    app.restore_session()?;
    if app.state != AppState::Dashboard {
        login_or_bail(&mut app).await?;
    }

    match run_command(&app, &command, filter.as_deref()).await {
        Err(e) if is_unauthorized(&e) => {
            // Stored token no longer accepted; drop it and ask again
            app.tokens.clear()?;
            eprintln!("Session expired, please log in again.");
            login_or_bail(&mut app).await?;
            run_command(&app, &command, filter.as_deref()).await
        }
        result => result,
    }
}

async fn run_command(app: &App, command: &str, filter: Option<&str>) -> Result<()> {
    match command {
        "tickets" => app.show_dashboard(filter).await,
        "replies" => app.show_auto_replies().await,
        other => anyhow::bail!("Unknown command '{}' (expected: tickets, replies)", other),
    }
}

async fn login_or_bail(app: &mut App) -> Result<()> {
    if !app.login_interactive().await? {
        let msg = app
            .login_error
            .take()
            .unwrap_or_else(|| "Login failed".to_string());
        anyhow::bail!(msg);
    }
    Ok(())
}

fn is_unauthorized(e: &anyhow::Error) -> bool {
    e.downcast_ref::<api::ApiError>()
        .map(api::ApiError::is_unauthorized)
        .unwrap_or(false)
}
