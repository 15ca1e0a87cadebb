use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vendor API base URL.
    pub api_base: String,
    /// CORS-relay endpoint for `POST /api/time_cards/register`. The relay
    /// injects the vendor-required origin/referer server-side and forwards
    /// status and body verbatim.
    #[serde(default)]
    pub proxy_url: String,
    /// Route register calls through `proxy_url` instead of the vendor.
    #[serde(default)]
    pub use_proxy: bool,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://api.pontomais.com.br".to_string(),
            proxy_url: String::new(),
            use_proxy: false,
            request_timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    /// `RPONTO_CONFIG_DIR` overrides it (used by tests and portable setups).
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RPONTO_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rponto")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rponto")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rponto.conf")
    }

    /// Persisted auth session (created by login, removed by logout).
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.json")
    }

    /// Pending-punch ledger, kept separate from the auth state.
    pub fn ledger_file() -> PathBuf {
        Self::config_dir().join("pending_punches.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    /// Write the config file (creating the config dir if needed).
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
