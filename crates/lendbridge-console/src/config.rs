/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed console configuration
[POS]:    Configuration layer - backend location and startup view
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use lendbridge_adapter::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::tabs::Panel;

/// Top-level configuration for the console
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Backend base URL; its path is prefixed to every route
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Panel shown at startup
    #[serde(default)]
    pub initial_panel: Panel,
    /// HTTP client options
    #[serde(default)]
    pub client: HttpConfig,
}

/// HTTP client options. Unset means no limit.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            initial_panel: Panel::default(),
            client: HttpConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl HttpConfig {
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
