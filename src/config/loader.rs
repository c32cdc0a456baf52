//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `serverwatch.toml`, falling back to defaults when
//! the file is absent, and validating all parameters.

use std::path::Path;

use anyhow::{Context, Result};

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: the built-in defaults apply. A
/// present but unreadable or invalid file is.
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        AppConfig::default()
    };

    validate_config(&config)?;

    Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
    anyhow::ensure!(
        !config.api.endpoint.is_empty(),
        "api.endpoint must not be empty"
    );
    anyhow::ensure!(
        config.api.timeout_seconds > 0,
        "api.timeout_seconds must be positive, got {}",
        config.api.timeout_seconds
    );
    anyhow::ensure!(
        config.poll.interval_seconds > 0,
        "poll.interval_seconds must be positive, got {}",
        config.poll.interval_seconds
    );
    anyhow::ensure!(
        !config.cache.path.is_empty(),
        "cache.path must not be empty"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config("definitely-not-here.toml").unwrap();
        assert_eq!(config.poll.interval_seconds, 15);
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.cache.path, "server_cache.json");
        assert!(config.api.endpoint.contains("GetServerList"));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [poll]
            interval_seconds = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.poll.interval_seconds, 30);
        assert_eq!(config.app.log_level, "info");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [poll]
            interval_seconds = 0
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            endpoint = ""
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }
}
