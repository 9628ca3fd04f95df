//! Solar radiation service
//!
//! Solar variables are served by the general forecast endpoint on
//! `api.open-meteo.com/v1/forecast`; this service carries the
//! radiation-specific variable sets.

use serde_json::Value;
use tracing::instrument;

use crate::{
    coords,
    error::Error,
    query::Query,
    services::AUTO_TIMEZONE,
    transport::Transport,
};

const HOST: &str = "https://api.open-meteo.com";
const PATH: &str = "/v1/forecast";

/// Hourly variables requested by [`SolarService::radiation`]
pub const RADIATION_HOURLY_VARIABLES: [&str; 6] = [
    "shortwave_radiation",
    "direct_radiation",
    "diffuse_radiation",
    "direct_normal_irradiance",
    "global_tilted_irradiance",
    "terrestrial_radiation",
];

/// Daily variables requested by [`SolarService::radiation`]
pub const RADIATION_DAILY_VARIABLES: [&str; 1] = ["shortwave_radiation_sum"];

/// Optional parameters for [`SolarService::forecast`]
#[derive(Debug, Clone, Default)]
pub struct SolarParams {
    /// Hourly variables to request
    pub hourly: Option<Vec<String>>,
    /// Daily variables to request
    pub daily: Option<Vec<String>>,
    /// IANA timezone name (default: `auto`)
    pub timezone: Option<String>,
    /// Number of forecast days
    pub forecast_days: Option<u8>,
    /// Number of past days to include
    pub past_days: Option<u8>,
}

/// Client for solar radiation forecasts
#[derive(Debug, Clone)]
pub struct SolarService {
    transport: Transport,
}

impl SolarService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch a solar forecast with caller-chosen variables
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        params: &SolarParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.opt_list("hourly", params.hourly.as_deref());
        query.opt_list("daily", params.daily.as_deref());
        query.opt("forecast_days", params.forecast_days);
        query.opt("past_days", params.past_days);
        query.set(
            "timezone",
            params.timezone.as_deref().unwrap_or(AUTO_TIMEZONE),
        );

        self.transport.get_json(HOST, PATH, &query).await
    }

    /// Fetch the standard radiation variable set over `days` forecast days
    ///
    /// Requests every variable in [`RADIATION_HOURLY_VARIABLES`] plus
    /// the daily [`RADIATION_DAILY_VARIABLES`], covering photovoltaic
    /// yield estimation without the caller spelling the lists out.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn radiation(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.list("hourly", &RADIATION_HOURLY_VARIABLES);
        query.list("daily", &RADIATION_DAILY_VARIABLES);
        query.set("forecast_days", days);
        query.set("timezone", AUTO_TIMEZONE);

        self.transport.get_json(HOST, PATH, &query).await
    }
}
