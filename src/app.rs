//! Application state and the login flow.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::api::ApiClient;
use crate::auth::TokenStore;
use crate::config::Config;

/// Fixed user-facing message for a rejected login; the server's error body
/// is deliberately not shown
const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Login,
    Dashboard,
}

pub struct App {
    pub api: ApiClient,
    pub tokens: TokenStore,
    pub state: AppState,
    pub login_error: Option<String>,
}

impl App {
    pub fn new(config: Config, tokens: TokenStore) -> Result<Self> {
        let api = ApiClient::new(&config).context("Failed to build API client")?;
        Ok(Self {
            api,
            tokens,
            state: AppState::Login,
            login_error: None,
        })
    }

    /// Restore a previously stored token, if any. Returns true when the app
    /// starts authenticated.
    pub fn restore_session(&mut self) -> Result<bool> {
        if let Some(token) = self.tokens.load()? {
            self.api = self.api.with_token(token);
            self.state = AppState::Dashboard;
            return Ok(true);
        }
        Ok(false)
    }

    /// Attempt login with the given credentials.
    ///
    /// Every exit path leaves a user-visible outcome: either the state moves
    /// to `Dashboard`, or `login_error` is set. Network failures are caught
    /// here rather than propagated.
    pub async fn attempt_login(&mut self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            self.login_error = Some("Username and password required".to_string());
            return false;
        }

        self.login_error = None;

        match self.api.login(username, password).await {
            Ok(Some(token)) => {
                if let Err(e) = self.tokens.save(&token) {
                    warn!(error = %e, "Failed to persist token");
                }
                self.api.set_token(token);
                self.state = AppState::Dashboard;
                info!("Login successful");
                true
            }
            Ok(None) => {
                // Rejected by the server; only pass/fail is surfaced
                self.login_error = Some(LOGIN_FAILED_MESSAGE.to_string());
                false
            }
            Err(e) => {
                error!(error = %e, "Login request failed");
                self.login_error = Some(format!("Unable to reach server: {}", e));
                false
            }
        }
    }

    /// Interactive login prompt (username on stdin, hidden password)
    pub async fn login_interactive(&mut self) -> Result<bool> {
        let username = Self::prompt_username()?;
        let password = rpassword::prompt_password("Password: ")?;
        Ok(self.attempt_login(username.trim(), &password).await)
    }

    fn prompt_username() -> Result<String> {
        print!("Username: ");
        io::stdout().flush()?;

        let mut username = String::new();
        io::stdin().read_line(&mut username)?;
        Ok(username.trim().to_string())
    }

    /// Print the ticket dashboard, optionally filtered by status
    pub async fn show_dashboard(&self, status: Option<&str>) -> Result<()> {
        let tickets = self
            .api
            .fetch_tickets(status)
            .await
            .context("Failed to fetch tickets")?;

        let open = tickets.iter().filter(|t| t.is_open()).count();
        println!("Tickets ({} total, {} open):", tickets.len(), open);
        for ticket in &tickets {
            println!("  {}", ticket.summary_line());
        }
        Ok(())
    }

    /// Print the configured auto-replies
    pub async fn show_auto_replies(&self) -> Result<()> {
        let replies = self
            .api
            .fetch_auto_replies()
            .await
            .context("Failed to fetch auto-replies")?;

        println!("Auto-replies ({}):", replies.len());
        for auto in &replies {
            let marker = if auto.is_active { "on " } else { "off" };
            println!("  [{}] {} -> {}", marker, auto.trigger, auto.reply);
        }
        Ok(())
    }
}
