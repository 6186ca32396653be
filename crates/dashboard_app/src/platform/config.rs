use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dashboard_engine::GatewaySettings;
use dashboard_logging::dashboard_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILENAME: &str = "dashboard.ron";
pub const API_URL_ENV: &str = "DASHBOARD_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    /// Mirror log output to the terminal in addition to `./dashboard.log`.
    pub log_to_terminal: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let settings = GatewaySettings::default();
        Self {
            api_base_url: settings.base_url,
            connect_timeout_ms: settings.connect_timeout.as_millis() as u64,
            request_timeout_ms: settings.request_timeout.as_millis() as u64,
            log_to_terminal: false,
        }
    }
}

impl DashboardConfig {
    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
        }
    }

    /// A non-blank override replaces the configured base URL.
    pub fn with_api_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loads `dashboard.ron` from `dir`, falling back to defaults when absent,
/// then applies the `DASHBOARD_API_URL` environment override.
pub fn load(dir: &Path) -> Result<DashboardConfig, ConfigError> {
    let config = load_file(dir)?;
    Ok(config.with_api_url_override(std::env::var(API_URL_ENV).ok()))
}

fn load_file(dir: &Path) -> Result<DashboardConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DashboardConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let config = ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.clone(),
        message: err.to_string(),
    })?;
    dashboard_info!("Loaded config from {:?}", path);
    Ok(config)
}
