//! Persisted auth session: load at startup, replace on login, clear on
//! logout. The session is an explicit value handed to the API client,
//! never module-level mutable state.

use crate::errors::AppResult;
use crate::models::session::AuthSession;
use std::fs;
use std::path::PathBuf;

pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// None when there is no session or the file does not parse
    /// (a stale or corrupt session is equivalent to being logged out).
    pub fn load(&self) -> Option<AuthSession> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable session file");
                None
            }
        }
    }

    pub fn save(&self, session: &AuthSession) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| crate::errors::AppError::Store(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
