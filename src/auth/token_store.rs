use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

/// Token file name in the data directory.
/// The token is stored as plain text; anyone with access to the user's data
/// directory can read it. Same trade-off the web panel makes with
/// localStorage.
const TOKEN_FILE: &str = "access_token";

/// Persistent storage for the access token. Holds at most one value at a
/// time; absence means unauthenticated.
pub struct TokenStore {
    data_dir: PathBuf,
}

impl TokenStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Persist the token, replacing any previous value.
    /// Plain overwrite; concurrent logins race and the last writer wins.
    pub fn save(&self, token: &str) -> Result<()> {
        let path = self.token_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create data directory")?;
        }
        std::fs::write(&path, token).context("Failed to write token file")?;
        debug!(path = %path.display(), "Token saved");
        Ok(())
    }

    /// Load the stored token; `None` means unauthenticated
    pub fn load(&self) -> Result<Option<String>> {
        let path = self.token_path();
        if !path.exists() {
            return Ok(None);
        }
        let token = std::fs::read_to_string(&path).context("Failed to read token file")?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(token))
    }

    /// Remove the stored token
    pub fn clear(&self) -> Result<()> {
        let path = self.token_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove token file")?;
        }
        Ok(())
    }

    fn token_path(&self) -> PathBuf {
        self.data_dir.join(TOKEN_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_on_fresh_dir_is_none() {
        let dir = TempDir::new().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());
        store.save("abc123").expect("save");
        assert_eq!(store.load().expect("load").as_deref(), Some("abc123"));

        // File is named after the storage key and holds the raw token
        let raw = std::fs::read_to_string(dir.path().join("access_token")).expect("read");
        assert_eq!(raw, "abc123");
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let dir = TempDir::new().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());
        store.save("first").expect("save");
        store.save("second").expect("save");
        assert_eq!(store.load().expect("load").as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_removes_token() {
        let dir = TempDir::new().expect("tempdir");
        let store = TokenStore::new(dir.path().to_path_buf());
        store.save("abc123").expect("save");
        store.clear().expect("clear");
        assert_eq!(store.load().expect("load"), None);
        // Clearing an already-empty store is fine
        store.clear().expect("clear");
    }
}
