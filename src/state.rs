//! Shared application state for the Axum server.

use crate::config::ApiConfig;

/// Shared application state, cloned into each handler.
///
/// Holds the environment metadata captured at startup; the values are not
/// expected to change during the process lifetime.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Deployment environment name.
    pub environment: String,
    /// Deployed application version.
    pub version: String,
}

impl AppState {
    /// Capture the reportable fields from loaded config.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            environment: config.environment.clone(),
            version: config.version.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_config_fields() {
        let state = AppState::from_config(&ApiConfig::default());
        assert_eq!(state.environment, "development");
        assert_eq!(state.version, "1.0.0");
    }
}
