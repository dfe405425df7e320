//! HTTP client for the Cafenet admin API.
//!
//! `request` is the generic helper every typed fetch goes through. Login is
//! kept on its own code path with coarser pass/fail reporting, matching how
//! the admin panel treats the login form.

use std::time::Duration;

use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::models::{AutoReply, Ticket};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Per-call request configuration merged over the client defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method; GET when left at the default
    pub method: Method,
    /// Extra headers; entries here win over the client defaults on collision
    pub headers: header::HeaderMap,
    /// Raw request body, sent as-is
    pub body: Option<String>,
}

/// API client for the admin backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the configured base address.
    /// The cookie store is always on, so credentials set by the server are
    /// forwarded on every subsequent request.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    fn default_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Issue a request for `path` relative to the base address and parse the
    /// JSON response.
    ///
    /// The caller is responsible for the leading slash; no path normalization
    /// is performed. On a non-success status the response body is carried
    /// verbatim in the returned `ApiError::Http`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = self.default_headers()?;
        // Caller entries replace defaults on key collision
        headers.extend(opts.headers);

        debug!(url = %url, method = %opts.method, "Sending API request");

        let mut builder = self.client.request(opts.method, &url).headers(headers);
        if let Some(body) = opts.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, body));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("{} (from {})", e, url)))
    }

    /// Authenticate against `/auth/login` and return the issued token.
    ///
    /// Deliberately does not go through `request`: the login form only needs
    /// pass/fail, so any non-success status maps to `Ok(None)` and the error
    /// body is discarded.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, ApiError> {
        let url = format!("{}/auth/login", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Login rejected");
            return Ok(None);
        }

        let token: TokenResponse = response.json().await?;
        Ok(Some(token.access_token))
    }

    // ===== Data Fetching Methods =====

    /// Fetch tickets, newest first, optionally filtered by status
    /// ("open", "answered")
    pub async fn fetch_tickets(&self, status: Option<&str>) -> Result<Vec<Ticket>, ApiError> {
        let path = match status {
            Some(s) => format!("/tickets/?status={}", s),
            None => "/tickets/".to_string(),
        };
        self.request(&path, RequestOptions::default()).await
    }

    /// Fetch all configured auto-replies
    pub async fn fetch_auto_replies(&self) -> Result<Vec<AutoReply>, ApiError> {
        self.request("/auto_replies/", RequestOptions::default())
            .await
    }
}
