//! Geocoding service
//!
//! Wraps `geocoding-api.open-meteo.com/v1/search`, resolving place
//! names to coordinates. The one service that takes no coordinates as
//! input, so it skips coordinate validation entirely.

use serde_json::Value;
use tracing::instrument;

use crate::{error::Error, query::Query, transport::Transport};

const HOST: &str = "https://geocoding-api.open-meteo.com";
const PATH: &str = "/v1/search";

/// Result count used when the caller does not set one
pub const DEFAULT_COUNT: u32 = 10;

/// Result language used when the caller does not set one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Optional parameters for [`GeocodingService::search`]
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Maximum number of results (default: 10)
    pub count: Option<u32>,
    /// Result language as a two-letter code (default: `en`)
    pub language: Option<String>,
}

/// Client for the geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingService {
    transport: Transport,
}

impl GeocodingService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Search for places by name
    ///
    /// Responses are always requested in JSON format.
    #[instrument(skip(self, params))]
    pub async fn search(&self, name: &str, params: &SearchParams) -> Result<Value, Error> {
        if name.trim().is_empty() {
            return Err(Error::validation("Location name must not be empty"));
        }

        let mut query = Query::new();
        query.set("name", name);
        query.set("count", params.count.unwrap_or(DEFAULT_COUNT));
        query.set(
            "language",
            params.language.as_deref().unwrap_or(DEFAULT_LANGUAGE),
        );
        query.set("format", "json");

        self.transport.get_json(HOST, PATH, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let transport = Transport::new(&ClientConfig::default()).expect("should build");
        let service = GeocodingService::new(transport);

        let err = service
            .search("   ", &SearchParams::default())
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::Validation(_)));
    }
}
