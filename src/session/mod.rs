//! Persisted session store.
//! The token issued at login/register is kept in the config directory so it
//! survives process restarts; logout removes the file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            path: Config::config_dir().join("session.yml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, if any
    pub fn load(&self) -> AppResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::SessionLoad(format!("{}: {}", self.path.display(), e)))?;
        let session = serde_yaml::from_str(&content)
            .map_err(|e| AppError::SessionLoad(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(session))
    }

    /// Persist the session, creating the config directory if needed
    pub fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::SessionSave(format!("{}: {}", dir.display(), e)))?;
        }
        let yaml = serde_yaml::to_string(session)
            .map_err(|e| AppError::SessionSave(e.to_string()))?;
        fs::write(&self.path, yaml)
            .map_err(|e| AppError::SessionSave(format!("{}: {}", self.path.display(), e)))?;
        Ok(())
    }

    /// Remove the stored session. Returns true when a session was removed.
    pub fn clear(&self) -> AppResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
