//! Configuration loading from disk.

use crate::config::schema::MonitorConfig;
use crate::config::validation::{validate_config, ValidationError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for the expected schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but failed semantic validation.
    #[error("validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<MonitorConfig, ConfigError> {
    let config: MonitorConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            endpoints = ["https://example.com", "http://internal:8080/health"]

            [poll]
            interval_secs = 10
            probe_timeout_secs = 15

            [content_drift]
            enabled = false

            [notification]
            enabled = true
            bot_token = "123:abc"
            chat_id = 42

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.len(), 2);
        assert_eq!(config.poll.interval_secs, 10);
        assert!(!config.content_drift.enabled);
        assert_eq!(config.notification.chat_id, 42);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = parse_config("endpoints = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_problems_are_validation_errors() {
        let err = parse_config(r#"endpoints = ["not a url"]"#).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other}"),
        }
    }
}
