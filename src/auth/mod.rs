//! Authentication state for the CLI.
//!
//! `TokenStore` persists the access token issued by the backend so later
//! runs start authenticated. No expiry metadata is tracked; a stale token
//! simply gets a 401 from the backend.

pub mod token_store;

pub use token_store::TokenStore;
