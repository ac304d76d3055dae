use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::transcript::DEFAULT_ENDPOINT;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub transcript_endpoint: Option<String>,
    pub default_format: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytmeta/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Transcript service endpoint, preferring an explicit override
    pub fn endpoint(&self, cli_override: Option<&str>) -> String {
        cli_override
            .or(self.transcript_endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string()
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytmeta")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
transcript_endpoint = "https://lessons.example.com/api/transcript"
default_format = "json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.transcript_endpoint.as_deref(),
            Some("https://lessons.example.com/api/transcript")
        );
        assert_eq!(config.default_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.transcript_endpoint.is_none());
        assert!(config.default_format.is_none());
    }

    #[test]
    fn test_endpoint_priority() {
        let config = Config {
            transcript_endpoint: Some("http://from-config/api/transcript".to_string()),
            default_format: None,
        };
        assert_eq!(
            config.endpoint(Some("http://from-cli/api/transcript")),
            "http://from-cli/api/transcript"
        );
        assert_eq!(config.endpoint(None), "http://from-config/api/transcript");
        assert_eq!(Config::default().endpoint(None), DEFAULT_ENDPOINT);
    }
}
