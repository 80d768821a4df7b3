use anyhow::{Context, Result};

use crate::catalog::DEFAULT_THEME_ID;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_MB: usize = 5;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent → the AI path is disabled and only local analysis runs.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_mb: usize,
    pub default_theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
            default_theme: DEFAULT_THEME_ID.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(DEFAULT_PORT),
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_mb: optional_env("MAX_UPLOAD_MB")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_MB),
            default_theme: optional_env("DEFAULT_THEME")
                .unwrap_or_else(|| DEFAULT_THEME_ID.to_string()),
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

/// Reads `key`, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_theme, "modern-blue");
        assert_eq!(config.max_upload_bytes(), 5 * 1024 * 1024);
        assert!(config.anthropic_api_key.is_none());
    }
}
