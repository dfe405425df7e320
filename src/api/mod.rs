//! REST API client module for the Cafenet admin backend.
//!
//! This module provides the `ApiClient` for talking to the admin API:
//! a generic JSON request helper plus typed fetches for tickets and
//! auto-replies.
//!
//! The API uses JWT bearer token authentication obtained through the
//! `/auth/login` endpoint.

pub mod client;
pub mod error;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
