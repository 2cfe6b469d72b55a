use serde::{Deserialize, Serialize};

/// Suggestion service configuration.
///
/// A single HTTP endpoint serves both actions (smart-sort and cover-page),
/// dispatched by an `action` field in the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggesterConfig {
    /// Endpoint URL for the suggestion service. Unset means the service is
    /// not configured; any call will fail with a configuration error.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    60
}

impl SuggesterConfig {
    /// Create a config pointing at the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_output_name() -> String {
    crate::pdf::DEFAULT_OUTPUT_NAME.to_string()
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Suggestion service configuration
    #[serde(default)]
    pub suggester: SuggesterConfig,

    /// Default base name for merged output files
    #[serde(default = "default_output_name")]
    pub output_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            suggester: SuggesterConfig::default(),
            output_name: default_output_name(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::error::Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::error::Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            crate::error::Error::ConfigLoad(format!("Failed to parse config: {e}"))
        })
    }

    /// Load from default locations (~/.config/pdf-composer/config.toml, ./config.toml)
    pub fn load() -> Self {
        // Try user config
        if let Some(config_dir) = crate::util::config_dir() {
            let user_config = config_dir.join("pdf-composer").join("config.toml");
            if user_config.exists() {
                match Self::from_file(&user_config) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {}", user_config.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Try local config
        let local_config = std::path::PathBuf::from("config.toml");
        if local_config.exists() {
            match Self::from_file(&local_config) {
                Ok(config) => {
                    tracing::debug!("Loaded config from ./config.toml");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load ./config.toml: {}", e);
                }
            }
        }

        // Return defaults
        tracing::debug!("No config file found, using defaults");
        Self::default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_endpoint() {
        let config = AppConfig::default();
        assert!(config.suggester.endpoint.is_none());
        assert_eq!(config.output_name, "merged-document");
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [suggester]
            endpoint = "https://example.com/api/pdfsort"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.suggester.endpoint.as_deref(),
            Some("https://example.com/api/pdfsort")
        );
        assert_eq!(config.suggester.timeout_secs, 60);
    }
}
