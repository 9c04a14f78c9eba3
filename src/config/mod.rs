use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn default_api_url() -> String {
    "http://localhost:8000/api".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Config {
    /// Return the configuration directory.
    /// `CHEMEQ_HOME` overrides the platform default (used by tests).
    pub fn config_dir() -> PathBuf {
        if let Ok(home) = env::var("CHEMEQ_HOME") {
            return PathBuf::from(home);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("chemeq")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".chemeq")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("chemeq.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    /// Initialize the configuration directory and default config file.
    /// An existing config file is left untouched.
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !path.exists() {
            let yaml = serde_yaml::to_string(&Config::default())
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(())
    }
}
