//! Application configuration.
//!
//! One environment-style setting: the API base address (`DESK_API_URL`).
//! It is read once at startup and handed to the client explicitly, so
//! call-time behavior never depends on ambient process state.

/// Environment variable naming the API base address
const API_URL_ENV: &str = "DESK_API_URL";

/// Fallback base address when no configuration is set (local dev backend)
const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    /// Read configuration from the process environment (after dotenvy has
    /// loaded any `.env` file).
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var(API_URL_ENV).ok().filter(|s| !s.is_empty()),
        }
    }

    /// The configured base address, falling back to the local dev server.
    /// A trailing slash is trimmed so request paths keep their leading slash.
    pub fn base_url(&self) -> String {
        self.api_url
            .as_deref()
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_defaults_when_unset() {
        let config = Config::default();
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let config = Config {
            api_url: Some("https://api.example.com/".to_string()),
        };
        assert_eq!(config.base_url(), "https://api.example.com");
    }
}
