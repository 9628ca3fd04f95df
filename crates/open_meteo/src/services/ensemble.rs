//! Ensemble forecast service
//!
//! Wraps `ensemble-api.open-meteo.com/v1/ensemble`. Every requested
//! variable comes back once per ensemble member, so responses fan out
//! into `temperature_2m_member01`-style series.

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

const HOST: &str = "https://ensemble-api.open-meteo.com";
const PATH: &str = "/v1/ensemble";

/// Optional parameters for [`EnsembleService::forecast`]
#[derive(Debug, Clone, Default)]
pub struct EnsembleParams {
    /// Hourly variables to request
    pub hourly: Option<Vec<String>>,
    /// Number of forecast days
    pub forecast_days: Option<u8>,
    /// Number of past days to include
    pub past_days: Option<u8>,
    /// First day of an explicit date range
    pub start_date: Option<NaiveDate>,
    /// Last day of an explicit date range
    pub end_date: Option<NaiveDate>,
    /// Ensemble models to query (e.g. `icon_seamless`, `gfs_seamless`)
    pub models: Option<Vec<String>>,
}

/// Client for the ensemble forecast API
#[derive(Debug, Clone)]
pub struct EnsembleService {
    transport: Transport,
}

impl EnsembleService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch an ensemble forecast for a location
    ///
    /// The timezone is always `auto`; this endpoint does not accept a
    /// caller override.
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        params: &EnsembleParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.opt_list("hourly", params.hourly.as_deref());
        query.opt("forecast_days", params.forecast_days);
        query.opt("past_days", params.past_days);
        query.opt("start_date", params.start_date);
        query.opt("end_date", params.end_date);
        query.opt_list("models", params.models.as_deref());
        query.set("timezone", AUTO_TIMEZONE);

        self.transport.get_json(HOST, PATH, &query).await
    }
}
