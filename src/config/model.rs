use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub docker: DockerConfig,
    #[serde(default)]
    pub logging: LogConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// UI customization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: CustomColors,
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colors: CustomColors::default(),
            mouse_enabled: true,
        }
    }
}

/// Custom color overrides for the status column
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomColors {
    pub running: Option<String>,
    pub stopped: Option<String>,
    pub paused: Option<String>,
    pub selection: Option<String>,
}

/// Docker connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default = "default_stop_timeout")]
    pub stop_timeout_seconds: i64,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            host: None,
            stop_timeout_seconds: default_stop_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

// Default value functions
fn default_poll_interval() -> u64 {
    1000
}

fn default_stop_timeout() -> i64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let general = GeneralConfig::default();
        assert_eq!(general.poll_interval_ms, 1000);

        let docker = DockerConfig::default();
        assert_eq!(docker.stop_timeout_seconds, 10);
        assert!(docker.host.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(!toml_str.is_empty());
    }

    #[test]
    fn test_partial_config_parse() {
        let config: Config = toml::from_str(
            r#"
            [docker]
            host = "tcp://localhost:2375"
            "#,
        )
        .unwrap();

        assert_eq!(config.docker.host.as_deref(), Some("tcp://localhost:2375"));
        assert_eq!(config.general.poll_interval_ms, 1000);
    }
}
