//! Air quality service
//!
//! Wraps `air-quality-api.open-meteo.com/v1/air-quality` for pollutant
//! concentrations, pollen and air quality indices.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::instrument;

use crate::{
    coords,
    error::Error,
    query::Query,
    services::AUTO_TIMEZONE,
    transport::Transport,
};

const HOST: &str = "https://air-quality-api.open-meteo.com";
const PATH: &str = "/v1/air-quality";

/// Optional parameters for the air quality endpoints
#[derive(Debug, Clone, Default)]
pub struct AirQualityParams {
    /// Hourly variables to request
    pub hourly: Option<Vec<String>>,
    /// Current-condition variables to request
    pub current: Option<Vec<String>>,
    /// IANA timezone name (default: `auto`)
    pub timezone: Option<String>,
    /// Number of forecast days
    pub forecast_days: Option<u8>,
    /// Number of past days to include
    pub past_days: Option<u8>,
    /// First day of an explicit date range
    pub start_date: Option<NaiveDate>,
    /// Last day of an explicit date range
    pub end_date: Option<NaiveDate>,
}

/// Client for the air quality API
#[derive(Debug, Clone)]
pub struct AirQualityService {
    transport: Transport,
}

impl AirQualityService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch an air quality forecast for a location
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        params: &AirQualityParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.opt_list("hourly", params.hourly.as_deref());
        query.opt_list("current", params.current.as_deref());
        query.opt("forecast_days", params.forecast_days);
        query.opt("past_days", params.past_days);
        query.opt("start_date", params.start_date);
        query.opt("end_date", params.end_date);
        query.set(
            "timezone",
            params.timezone.as_deref().unwrap_or(AUTO_TIMEZONE),
        );

        self.transport.get_json(HOST, PATH, &query).await
    }

    /// Fetch air quality data for an explicit past date range
    ///
    /// The positional dates win; `start_date` and `end_date` inside
    /// `params` are not sent by this method.
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn historical(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        params: &AirQualityParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.set("start_date", start_date);
        query.set("end_date", end_date);
        query.opt_list("hourly", params.hourly.as_deref());
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
