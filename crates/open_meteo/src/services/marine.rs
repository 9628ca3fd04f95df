//! Marine weather service
//!
//! Wraps `marine-api.open-meteo.com/v1/marine`, serving wave height,
//! direction, period and sea surface temperature for ocean points.

use serde_json::Value;
use tracing::instrument;

use crate::{
    coords,
    error::Error,
    query::Query,
    services::AUTO_TIMEZONE,
    transport::Transport,
};

const HOST: &str = "https://marine-api.open-meteo.com";
const PATH: &str = "/v1/marine";

/// Optional parameters for [`MarineService::forecast`]
#[derive(Debug, Clone, Default)]
pub struct MarineParams {
    /// Hourly variables to request
    pub hourly: Option<Vec<String>>,
    /// Daily variables to request
    pub daily: Option<Vec<String>>,
    /// Current-condition variables to request
    pub current: Option<Vec<String>>,
    /// IANA timezone name (default: `auto`)
    pub timezone: Option<String>,
    /// Number of forecast days
    pub forecast_days: Option<u8>,
    /// Number of past days to include
    pub past_days: Option<u8>,
}

/// Client for the marine weather API
#[derive(Debug, Clone)]
pub struct MarineService {
    transport: Transport,
}

impl MarineService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch a marine forecast for a location
    ///
    /// The API only has data for grid points at sea; requests for
    /// inland coordinates succeed but return empty series.
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        params: &MarineParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.opt_list("hourly", params.hourly.as_deref());
        query.opt_list("daily", params.daily.as_deref());
        query.opt_list("current", params.current.as_deref());
        query.opt("forecast_days", params.forecast_days);
        query.opt("past_days", params.past_days);
        query.set(
            "timezone",
            params.timezone.as_deref().unwrap_or(AUTO_TIMEZONE),
        );

        self.transport.get_json(HOST, PATH, &query).await
    }
}
