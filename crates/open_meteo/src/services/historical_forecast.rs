//! Historical forecast service
//!
//! Wraps `historical-forecast-api.open-meteo.com/v1/forecast`. Unlike
//! the reanalysis archive this serves past runs of the forecast
//! models, so model output can be compared with what actually
//! happened.

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

const HOST: &str = "https://historical-forecast-api.open-meteo.com";
const PATH: &str = "/v1/forecast";

/// Optional parameters for [`HistoricalForecastService::forecast`]
#[derive(Debug, Clone, Default)]
pub struct HistoricalForecastParams {
    /// Hourly variables to request
    pub hourly: Option<Vec<String>>,
    /// Forecast models to query
    pub models: Option<Vec<String>>,
}

/// Client for the historical forecast API
#[derive(Debug, Clone)]
pub struct HistoricalForecastService {
    transport: Transport,
}

impl HistoricalForecastService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch archived forecast runs for a date range
    ///
    /// The timezone is always `auto`; this endpoint does not accept a
    /// caller override.
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        params: &HistoricalForecastParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.set("start_date", start_date);
        query.set("end_date", end_date);
        query.opt_list("hourly", params.hourly.as_deref());
        query.opt_list("models", params.models.as_deref());
        query.set("timezone", AUTO_TIMEZONE);

        self.transport.get_json(HOST, PATH, &query).await
    }
}
