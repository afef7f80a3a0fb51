use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    pub provider_config: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    /// Falls back to the TRANSLATOR_API_KEY environment variable when
    /// not set in the file.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_output_tokens() -> u32 {
    1000
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // File type by extension, JSON or YAML
        let path_lower = path.to_lowercase();
        let config: Config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ProviderConfig {
    /// Resolve the API key from config or environment; empty when
    /// neither is set, which the provider sends as-is (open endpoints
    /// ignore the header).
    pub fn resolved_api_key(&self) -> String {
        self.api_key
            .clone()
            .or_else(|| std::env::var("TRANSLATOR_API_KEY").ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_config_with_defaults() {
        let yaml = r#"
provider_config:
  base_url: "https://api.example.com/v1"
  model: "demo-model"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.system_config.port, 3001);
        assert_eq!(config.provider_config.temperature, 0.3);
        assert_eq!(config.provider_config.max_output_tokens, 1000);
        assert!(config.provider_config.api_key.is_none());
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let yaml = r#"
system_config:
  host: "127.0.0.1"
  port: 8080
provider_config:
  base_url: "https://api.example.com/v1"
  model: "demo-model"
  api_key: "secret"
  temperature: 0.7
  max_output_tokens: 256
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.provider_config.temperature, 0.7);
        assert_eq!(config.provider_config.resolved_api_key(), "secret");
    }
}
