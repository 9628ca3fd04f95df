//! Client configuration

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Configuration shared by every Open-Meteo service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL override applied to every service
    ///
    /// Each service targets its own open-meteo.com host by default.
    /// Setting this routes all requests to the given URL instead,
    /// which is how the integration tests point the client at a mock
    /// server and how self-hosted instances are reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API key for commercial Open-Meteo plans
    ///
    /// The free tier needs no key. Stored but not yet attached to
    /// requests; commercial endpoints are not supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for testing (no API key, short timeout)
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_ms: 5_000,
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// Not invoked during client construction; callers loading
    /// configuration from external sources can run it up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), Error> {
        if self.timeout_ms == 0 {
            return Err(Error::validation("timeout_ms must be greater than 0"));
        }
        if let Some(base_url) = &self.base_url {
            if base_url.trim().is_empty() {
                return Err(Error::validation("base_url must not be blank when set"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, None);
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_config_from_empty_json() {
        let config: ClientConfig = serde_json::from_str("{}").expect("should deserialize");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_testing_config() {
        let config = ClientConfig::for_testing();
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_ms, 5_000);
    }

    #[test]
    fn test_validation_success() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = ClientConfig {
            timeout_ms: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_base_url() {
        let config = ClientConfig {
            base_url: Some("  ".to_string()),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = ClientConfig {
            base_url: Some("https://self-hosted.example.com".to_string()),
            api_key: None,
            timeout_ms: 5_000,
        };

        let json = serde_json::to_string(&config).expect("should serialize");
        assert!(!json.contains("api_key"));

        let deserialized: ClientConfig = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(
            deserialized.base_url.as_deref(),
            Some("https://self-hosted.example.com")
        );
        assert_eq!(deserialized.timeout_ms, 5_000);
    }
}
