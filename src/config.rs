//! Application configuration
//!
//! Floorset reads a TOML config for the backend endpoint, canvas
//! geometry, and session file location. Every field has a default, so an
//! absent file or a partial document both work.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::editor::Grid;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The default configuration document.
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5000"
timeout_secs = 10

[canvas]
width = 1000
height = 700
grid_unit = 40

[session]
file = "floorset-session.json"
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    pub width: i32,
    pub height: i32,
    pub grid_unit: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub canvas: CanvasConfig,
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("default config should be valid TOML")
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string. Missing sections fall back
    /// to the defaults.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct Partial {
            api: Option<ApiConfig>,
            canvas: Option<CanvasConfig>,
            session: Option<SessionConfig>,
        }
        let partial: Partial = toml::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            api: partial.api.unwrap_or(defaults.api),
            canvas: partial.canvas.unwrap_or(defaults.canvas),
            session: partial.session.unwrap_or(defaults.session),
        })
    }

    /// The editor grid described by the canvas section.
    pub fn grid(&self) -> Grid {
        Grid::new(self.canvas.grid_unit, self.canvas.width, self.canvas.height)
    }
}
