use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the F1 highlight extractor
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Transcript service settings
    pub transcript: TranscriptServiceConfig,

    /// HTTP API settings
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptServiceConfig {
    /// Base URL of the sidecar transcript service
    pub base_url: String,

    /// Language preference order requested from the service
    pub languages: Vec<String>,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Delay before each fetch in milliseconds, to respect upstream rate limits
    pub fetch_delay_ms: u64,
}

impl Default for TranscriptServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            languages: vec![
                "en".to_string(),
                "en-US".to_string(),
                "en-GB".to_string(),
            ],
            timeout_seconds: 30,
            fetch_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Port for the HTTP API server
    pub port: u16,

    /// Allow cross-origin requests from any origin
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            enable_cors: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        // Try to load from various locations
        let config_paths = [
            "f1-highlighter.toml",
            "config/f1-highlighter.toml",
            "~/.config/f1-highlighter/config.toml",
            "/etc/f1-highlighter/config.toml",
        ];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        // Try environment variables
        if let Ok(config) = Self::from_env() {
            return Ok(config);
        }

        Err(anyhow!("No configuration file found"))
    }

    /// Load configuration from an explicit file path
    pub fn load_from(path: &str) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config = toml::from_str(&config_str)?;
        tracing::info!("📄 Loaded configuration from: {}", path);
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("F1_HIGHLIGHTER_TRANSCRIPT_URL") {
            config.transcript.base_url = base_url;
        }

        if let Ok(languages) = std::env::var("F1_HIGHLIGHTER_LANGUAGES") {
            config.transcript.languages =
                languages.split(',').map(|s| s.trim().to_string()).collect();
        }

        if let Ok(delay) = std::env::var("F1_HIGHLIGHTER_FETCH_DELAY_MS") {
            config.transcript.fetch_delay_ms = delay.parse().unwrap_or(500);
        }

        if let Ok(port) = std::env::var("F1_HIGHLIGHTER_PORT") {
            config.api.port = port.parse().unwrap_or(8080);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.transcript.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.transcript.languages, vec!["en", "en-US", "en-GB"]);
        assert_eq!(config.transcript.fetch_delay_ms, 500);
        assert_eq!(config.api.port, 8080);
        assert!(config.api.enable_cors);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.transcript.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [transcript]
            base_url = "http://transcripts.local:9090"
            fetch_delay_ms = 0
            "#
        )
        .unwrap();

        let config = Config::load_from(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.transcript.base_url, "http://transcripts.local:9090");
        assert_eq!(config.transcript.fetch_delay_ms, 0);
        assert_eq!(config.api.port, 8080);
    }
}
