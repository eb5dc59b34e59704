use std::path::{Path, PathBuf};

use crate::{config, types::Token};

/// Caches the access token captured at login.
///
/// There is no refresh: implicit-grant tokens come without a refresh token,
/// so an expired token means logging in again.
pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    /// Manager for `token` at the default cache path,
    /// `<data_dir>/cache/token.json`.
    pub fn new(token: Token) -> Self {
        TokenManager {
            token,
            path: Self::token_path(),
        }
    }

    /// Manager for `token` cached at `path`.
    pub fn with_path(token: Token, path: impl Into<PathBuf>) -> Self {
        TokenManager {
            token,
            path: path.into(),
        }
    }

    /// Loads the token cached at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error string when nobody has logged in yet, the cache is
    /// unreadable or it holds an empty token.
    pub async fn load() -> Result<Self, String> {
        Self::load_from(Self::token_path()).await
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        if token.access_token.is_empty() {
            return Err("cached token is empty".to_string());
        }
        Ok(Self {
            token,
            path: path.to_path_buf(),
        })
    }

    /// Writes the token to its cache path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns the io or serialization error as a string.
    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Access token as captured; no expiry check is made.
    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }
}
