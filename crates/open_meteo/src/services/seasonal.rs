//! Seasonal forecast service
//!
//! Wraps `seasonal-api.open-meteo.com/v1/seasonal`, serving long-range
//! forecasts up to seven months ahead.

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

const HOST: &str = "https://seasonal-api.open-meteo.com";
const PATH: &str = "/v1/seasonal";

/// Daily variables queried when the caller does not pick any
pub const DEFAULT_SEASONAL_DAILY: [&str; 2] = ["temperature_2m_max", "temperature_2m_min"];

/// Optional parameters for [`SeasonalService::forecast`]
#[derive(Debug, Clone, Default)]
pub struct SeasonalParams {
    /// Daily variables to request (default: [`DEFAULT_SEASONAL_DAILY`])
    pub daily: Option<Vec<String>>,
    /// First day of an explicit date range
    pub start_date: Option<NaiveDate>,
    /// Last day of an explicit date range
    pub end_date: Option<NaiveDate>,
}

/// Client for the seasonal forecast API
#[derive(Debug, Clone)]
pub struct SeasonalService {
    transport: Transport,
}

impl SeasonalService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch a seasonal forecast for a location
    ///
    /// The timezone is always `auto`; this endpoint does not accept a
    /// caller override.
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        params: &SeasonalParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        match params.daily.as_deref() {
            Some(daily) => query.list("daily", daily),
            None => query.list("daily", &DEFAULT_SEASONAL_DAILY),
        };
        query.opt("start_date", params.start_date);
        query.opt("end_date", params.end_date);
        query.set("timezone", AUTO_TIMEZONE);

        self.transport.get_json(HOST, PATH, &query).await
    }
}
