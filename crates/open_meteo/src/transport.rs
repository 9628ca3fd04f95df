//! Shared HTTP transport for all Open-Meteo services

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{config::ClientConfig, error::Error, query::Query};

/// User agent attached to every outgoing request
pub const USER_AGENT: &str = concat!("open-meteo-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP executor shared by every service of one client
///
/// Cloning shares the underlying connection pool; every service of a
/// client holds a clone of the same transport.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: Option<String>,
}

impl Transport {
    /// Build the transport from a client configuration
    pub(crate) fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Full request URL for a service endpoint
    ///
    /// `host` is the service's default endpoint; a configured
    /// `base_url` override wins over it.
    fn resolve_url(&self, host: &str, path: &str) -> String {
        self.base_url.as_ref().map_or_else(
            || format!("{host}{path}"),
            |base| format!("{}{}", base.trim_end_matches('/'), path),
        )
    }

    /// Issue a GET request and hand back the raw JSON body
    pub(crate) async fn get_json(
        &self,
        host: &str,
        path: &str,
        query: &Query,
    ) -> Result<Value, Error> {
        let url = self.resolve_url(host, path);
        debug!(url = %url, "Sending Open-Meteo request");

        let response = self
            .http
            .get(&url)
            .query(query.pairs())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        response.json().await.map_err(|e| {
            if e.is_decode() {
                Error::Decode(e.to_string())
            } else {
                Error::Transport(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = Transport::new(&ClientConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_resolve_url_default_host() {
        let transport = Transport::new(&ClientConfig::default()).expect("should build");
        assert_eq!(
            transport.resolve_url("https://api.open-meteo.com", "/v1/forecast"),
            "https://api.open-meteo.com/v1/forecast"
        );
    }

    #[test]
    fn test_resolve_url_with_override() {
        let config = ClientConfig {
            base_url: Some("http://127.0.0.1:8080/".to_string()),
            ..ClientConfig::default()
        };
        let transport = Transport::new(&config).expect("should build");
        assert_eq!(
            transport.resolve_url("https://api.open-meteo.com", "/v1/forecast"),
            "http://127.0.0.1:8080/v1/forecast"
        );
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("open-meteo-rs/"));
        assert!(USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
