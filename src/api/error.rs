use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-success HTTP status. Display is the raw response body, so callers
    /// that only surface the message keep the server's wording verbatim;
    /// callers that want to branch look at `status` instead.
    #[error("{body}")]
    Http { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn from_status(status: StatusCode, body: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            body: body.into(),
        }
    }

    /// HTTP status for `Http` errors, `None` for transport-level failures
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
