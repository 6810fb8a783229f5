use serde::Deserialize;

use crate::error::{AugurError, Result};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AugurConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key. The key
    /// itself never lives in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_platform")]
    pub default_platform: String,
    #[serde(default = "default_jurisdiction")]
    pub default_jurisdiction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_platform() -> String {
    "General".to_string()
}

fn default_jurisdiction() -> String {
    "International".to_string()
}

fn default_format() -> String {
    "terminal".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            default_platform: default_platform(),
            default_jurisdiction: default_jurisdiction(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl AugurConfig {
    pub fn load() -> Result<Self> {
        let config_path = std::path::Path::new("augur.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: AugurConfig =
            toml::from_str(&content).map_err(|e| AugurError::Toml(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AugurConfig::default();
        assert_eq!(config.gateway.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gateway.timeout_secs, 60);
        assert_eq!(config.scan.default_platform, "General");
        assert_eq!(config.output.format, "terminal");
    }

    #[test]
    fn test_load_from_valid_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("augur.toml");
        std::fs::write(
            &config_path,
            r#"
[gateway]
model = "gemini-2.0-pro"
timeout_secs = 20

[scan]
default_jurisdiction = "India"
"#,
        )
        .unwrap();
        let config = AugurConfig::load_from(&config_path).unwrap();
        assert_eq!(config.gateway.model, "gemini-2.0-pro");
        assert_eq!(config.gateway.timeout_secs, 20);
        // Untouched sections keep their defaults.
        assert_eq!(config.gateway.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.scan.default_jurisdiction, "India");
        assert_eq!(config.scan.default_platform, "General");
    }

    #[test]
    fn test_load_from_invalid_toml_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("augur.toml");
        std::fs::write(&config_path, "[gateway\nmodel = ").unwrap();
        assert!(AugurConfig::load_from(&config_path).is_err());
    }
}
