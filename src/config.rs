// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Backend endpoint configuration, resolved once at startup and injected
/// into the client so nothing deeper reads the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: ScreenerConfig,
    production: ScreenerConfig,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ScreenerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL: explicit override, then environment variable,
    /// then an optional environment-keyed config.yaml, then the local
    /// development default.
    pub fn resolve(override_url: Option<&str>) -> Result<Self> {
        if let Some(url) = override_url {
            return Ok(Self::new(url));
        }

        if let Ok(url) = std::env::var("RESUME_SCREENER_API_URL") {
            if !url.trim().is_empty() {
                return Ok(Self::new(url));
            }
        }

        if let Some(config) = Self::load_from_file()? {
            return Ok(config);
        }

        Ok(Self::default())
    }

    fn get_environment() -> String {
        std::env::var("RESUME_SCREENER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file() -> Result<Option<Self>> {
        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            return Ok(None);
        }

        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let config = match environment.as_str() {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Some(Self::new(config.base_url)))
    }
}
