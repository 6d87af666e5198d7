use crate::errors::{GeminiError, GeminiResult};
use crate::types::DEFAULT_MODEL_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Configuration struct for Gemini API
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub system_prompt: Option<String>,
    pub model_name: Option<String>,
    /// API root, e.g. a proxy in front of generativelanguage.googleapis.com
    pub api_base: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            system_prompt: None,
            model_name: Some(DEFAULT_MODEL_NAME.to_string()),
            api_base: None,
        }
    }
}

impl GeminiConfig {
    /// Overrides the API key from the environment, loading `.env` first if present
    pub fn apply_env(&mut self) {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        self.apply_api_key(std::env::var(API_KEY_ENV_VAR).ok());
    }

    fn apply_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> GeminiResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        GeminiError::ConfigError("Could not determine home directory".to_string())
    })?;

    let config_dir = home_dir.join(".config").join(app_name);

    Ok(config_dir)
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> GeminiResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_env_key_is_ignored() {
        let mut config = GeminiConfig {
            api_key: Some("file-key".to_string()),
            ..Default::default()
        };
        config.apply_api_key(Some("  ".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("file-key"));

        config.apply_api_key(Some("env-key".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GeminiConfig = toml::from_str(r#"api_key = "abc""#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.model_name.as_deref(), Some(DEFAULT_MODEL_NAME));
        assert!(config.api_base.is_none());
    }

    #[test]
    fn test_default_config_file_location() {
        if let Ok(path) = get_default_config_file("mindchat") {
            assert!(path.ends_with(".config/mindchat/config.toml"));
        }
    }
}
