use anyhow::{Context, Result};
use mindchat_core::config::{get_default_config_file, GeminiConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "mindchat";

/// Configuration for the chat server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub http_addr: SocketAddr,

    /// Idle minutes before a session is dropped; 0 keeps sessions for the process lifetime
    pub session_ttl_minutes: Option<u64>,

    /// Seconds between sweeps for expired sessions
    pub cleanup_interval_secs: u64,

    /// Gemini API settings
    pub gemini: GeminiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            session_ttl_minutes: Some(60),
            cleanup_interval_secs: 60,
            gemini: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a file if it exists, otherwise returns the default config
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Loads `~/.config/mindchat/config.toml`, falling back to defaults
    pub fn load_from_default() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from_file(&path)
    }

    pub fn default_path() -> Result<PathBuf> {
        get_default_config_file(APP_NAME).map_err(|e| anyhow::anyhow!(e))
    }

    pub fn session_ttl(&self) -> Option<chrono::Duration> {
        self.session_ttl_minutes
            .filter(|minutes| *minutes > 0)
            .and_then(|minutes| i64::try_from(minutes).ok())
            .and_then(chrono::Duration::try_minutes)
    }
}
