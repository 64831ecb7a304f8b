//! Service configuration, read from the process environment.

use serde::Deserialize;

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Deployment environment name (`ENVIRONMENT` env var).
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Deployed application version (`VERSION` env var).
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl ApiConfig {
    /// Load config from environment variables.
    ///
    /// Only `ENVIRONMENT` and `VERSION` are recognized; anything else
    /// keeps its default.
    pub fn from_env() -> Self {
        Self {
            environment: env_or("ENVIRONMENT", default_environment),
            version: env_or("VERSION", default_version),
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            version: default_version(),
        }
    }
}

fn env_or(name: &str, default: fn() -> String) -> String {
    or_default(std::env::var(name).ok(), default)
}

/// An empty value counts as unset.
fn or_default(value: Option<String>, default: fn() -> String) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn unset_value_falls_back() {
        assert_eq!(or_default(None, default_version), "1.0.0");
    }

    #[test]
    fn empty_value_falls_back() {
        assert_eq!(
            or_default(Some(String::new()), default_environment),
            "development"
        );
    }

    #[test]
    fn set_value_wins() {
        assert_eq!(
            or_default(Some("staging".to_string()), default_environment),
            "staging"
        );
    }
}
