//! Climate projection service
//!
//! Wraps `climate-api.open-meteo.com/v1/climate`, serving downscaled
//! CMIP6 climate model projections.

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

const HOST: &str = "https://climate-api.open-meteo.com";
const PATH: &str = "/v1/climate";

/// Climate model queried when the caller does not pick any
pub const DEFAULT_CLIMATE_MODEL: &str = "EC_Earth3P_HR";

/// Optional parameters for [`ClimateService::projections`]
#[derive(Debug, Clone, Default)]
pub struct ClimateParams {
    /// First day of the projection range
    pub start_date: Option<NaiveDate>,
    /// Last day of the projection range
    pub end_date: Option<NaiveDate>,
    /// Climate models to query (default: [`DEFAULT_CLIMATE_MODEL`])
    pub models: Option<Vec<String>>,
    /// Daily variables to request
    pub daily: Option<Vec<String>>,
    /// IANA timezone name (default: `auto`)
    pub timezone: Option<String>,
}

/// Client for the climate projection API
#[derive(Debug, Clone)]
pub struct ClimateService {
    transport: Transport,
}

impl ClimateService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch climate model projections for a location
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn projections(
        &self,
        latitude: f64,
        longitude: f64,
        params: &ClimateParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.opt("start_date", params.start_date);
        query.opt("end_date", params.end_date);
        match params.models.as_deref() {
            Some(models) => query.list("models", models),
            None => query.set("models", DEFAULT_CLIMATE_MODEL),
        };
        query.opt_list("daily", params.daily.as_deref());
        query.set(
            "timezone",
            params.timezone.as_deref().unwrap_or(AUTO_TIMEZONE),
        );

        self.transport.get_json(HOST, PATH, &query).await
    }
}
