//! Historical weather service
//!
//! Wraps `archive-api.open-meteo.com/v1/archive`, the reanalysis
//! archive reaching back to 1940.

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

const HOST: &str = "https://archive-api.open-meteo.com";
const PATH: &str = "/v1/archive";

/// Optional parameters for [`HistoricalService::weather`]
#[derive(Debug, Clone, Default)]
pub struct HistoricalParams {
    /// Hourly variables to request
    pub hourly: Option<Vec<String>>,
    /// Daily variables to request
    pub daily: Option<Vec<String>>,
    /// IANA timezone name (default: `auto`)
    pub timezone: Option<String>,
}

/// Client for the historical weather archive API
#[derive(Debug, Clone)]
pub struct HistoricalService {
    transport: Transport,
}

impl HistoricalService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch archived weather for a date range
    ///
    /// The archive rejects open-ended queries, so both dates are
    /// required.
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn weather(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        params: &HistoricalParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.set("start_date", start_date);
        query.set("end_date", end_date);
        query.opt_list("hourly", params.hourly.as_deref());
        query.opt_list("daily", params.daily.as_deref());
        query.set(
            "timezone",
            params.timezone.as_deref().unwrap_or(AUTO_TIMEZONE),
        );

        self.transport.get_json(HOST, PATH, &query).await
    }
}
