//! Weather forecast service
//!
//! Wraps `api.open-meteo.com/v1/forecast`, the general forecast
//! endpoint covering hourly, daily and current-condition variables.

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

/// Current-condition variables requested by [`WeatherService::current`]
pub const CURRENT_VARIABLES: [&str; 15] = [
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "is_day",
    "precipitation",
    "rain",
    "showers",
    "snowfall",
    "weather_code",
    "cloud_cover",
    "pressure_msl",
    "surface_pressure",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
];

/// Measurement units for [`WeatherService::current`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Celsius, km/h and millimetres (the API default)
    #[default]
    Metric,
    /// Fahrenheit, mph and inches
    Imperial,
}

/// Optional parameters for [`WeatherService::forecast`]
#[derive(Debug, Clone, Default)]
pub struct ForecastParams {
    /// Hourly variables to request
    pub hourly: Option<Vec<String>>,
    /// Daily variables to request
    pub daily: Option<Vec<String>>,
    /// Current-condition variables to request
    pub current: Option<Vec<String>>,
    /// IANA timezone name (default: `auto`)
    pub timezone: Option<String>,
    /// Number of forecast days (1-16)
    pub forecast_days: Option<u8>,
    /// Number of past days to include
    pub past_days: Option<u8>,
}

/// Client for the weather forecast API
#[derive(Debug, Clone)]
pub struct WeatherService {
    transport: Transport,
}

impl WeatherService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch a weather forecast for a location
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        params: &ForecastParams,
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

    /// Fetch current conditions with the full standard variable set
    ///
    /// Requests every variable in [`CURRENT_VARIABLES`]. `units`
    /// switches the response to imperial measurements; metric is the
    /// API default and adds no unit parameters.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn current(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.list("current", &CURRENT_VARIABLES);
        if units == UnitSystem::Imperial {
            query.set("temperature_unit", "fahrenheit");
            query.set("wind_speed_unit", "mph");
            query.set("precipitation_unit", "inch");
        }
        query.set("timezone", AUTO_TIMEZONE);

        self.transport.get_json(HOST, PATH, &query).await
    }
}
