//! Flood service
//!
//! Wraps `flood-api.open-meteo.com/v1/flood`, serving GloFAS river
//! discharge forecasts. The flood API carries no timezone parameter;
//! its series are day-resolution UTC.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::{coords, error::Error, query::Query, transport::Transport};

const HOST: &str = "https://flood-api.open-meteo.com";
const PATH: &str = "/v1/flood";

/// Daily variables requested by [`FloodService::river_discharge`]
pub const DISCHARGE_VARIABLES: [&str; 7] = [
    "river_discharge",
    "river_discharge_mean",
    "river_discharge_median",
    "river_discharge_max",
    "river_discharge_min",
    "river_discharge_p25",
    "river_discharge_p75",
];

/// Optional parameters for [`FloodService::forecast`]
#[derive(Debug, Clone, Default)]
pub struct FloodParams {
    /// Daily variables to request
    pub daily: Option<Vec<String>>,
    /// Number of forecast days
    pub forecast_days: Option<u8>,
    /// Number of past days to include
    pub past_days: Option<u8>,
    /// First day of an explicit date range
    pub start_date: Option<NaiveDate>,
    /// Last day of an explicit date range
    pub end_date: Option<NaiveDate>,
    /// Hydrological models to query
    pub models: Option<Vec<String>>,
}

/// Flood risk grade derived from peak river discharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskLevel {
    /// Grade a peak discharge in m³/s
    ///
    /// Thresholds are generic, not calibrated to any particular river.
    #[must_use]
    pub fn from_discharge(max_discharge: f64) -> Self {
        if max_discharge < 100.0 {
            Self::Low
        } else if max_discharge < 500.0 {
            Self::Moderate
        } else if max_discharge < 1000.0 {
            Self::High
        } else {
            Self::Severe
        }
    }

    /// Short human-readable summary of the grade
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Normal river flow, minimal flood risk",
            Self::Moderate => "Elevated river flow, monitor conditions",
            Self::High => "High river flow, flood risk present",
            Self::Severe => "Very high river flow, significant flood risk",
        }
    }
}

/// Client-side risk summary over a discharge series
#[derive(Debug, Clone, Serialize)]
pub struct FloodRisk {
    /// Grade taken from the peak of the series
    pub level: RiskLevel,
    /// Largest discharge in the series (m³/s)
    pub max_discharge: f64,
    /// Mean discharge across the series (m³/s)
    pub mean_discharge: f64,
}

impl FloodRisk {
    /// Summarize a daily discharge series
    ///
    /// Null entries are skipped; returns `None` when nothing numeric
    /// remains.
    #[allow(clippy::cast_precision_loss)]
    fn from_series(values: &[Value]) -> Option<Self> {
        let numbers: Vec<f64> = values.iter().filter_map(Value::as_f64).collect();
        if numbers.is_empty() {
            return None;
        }

        let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;

        Some(Self {
            level: RiskLevel::from_discharge(max),
            max_discharge: max,
            mean_discharge: mean,
        })
    }
}

/// River discharge forecast with its client-side risk summary
#[derive(Debug, Clone, Serialize)]
pub struct DischargeOutlook {
    /// Raw API response, unmodified
    pub raw: Value,
    /// Risk summary; `None` when the response has no discharge series
    pub risk: Option<FloodRisk>,
}

/// Client for the flood API
#[derive(Debug, Clone)]
pub struct FloodService {
    transport: Transport,
}

impl FloodService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch a flood forecast for a location
    #[instrument(skip(self, params), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        params: &FloodParams,
    ) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.opt_list("daily", params.daily.as_deref());
        query.opt("forecast_days", params.forecast_days);
        query.opt("past_days", params.past_days);
        query.opt("start_date", params.start_date);
        query.opt("end_date", params.end_date);
        query.opt_list("models", params.models.as_deref());

        self.transport.get_json(HOST, PATH, &query).await
    }

    /// Fetch the standard discharge variables and grade the flood risk
    ///
    /// Requests every variable in [`DISCHARGE_VARIABLES`] over `days`
    /// forecast days. The risk summary is computed from the returned
    /// `river_discharge` series and is `None` when the response has
    /// none, which happens for points far from any modelled river.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn river_discharge(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<DischargeOutlook, Error> {
        coords::validate(latitude, longitude)?;

        let mut query = Query::for_location(latitude, longitude);
        query.list("daily", &DISCHARGE_VARIABLES);
        query.set("forecast_days", days);

        let raw = self.transport.get_json(HOST, PATH, &query).await?;
        let risk = raw
            .pointer("/daily/river_discharge")
            .and_then(Value::as_array)
            .and_then(|series| FloodRisk::from_series(series));

        Ok(DischargeOutlook { raw, risk })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_discharge(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_discharge(99.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_discharge(100.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_discharge(499.9), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_discharge(500.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_discharge(999.9), RiskLevel::High);
        assert_eq!(RiskLevel::from_discharge(1000.0), RiskLevel::Severe);
    }

    #[test]
    fn test_risk_level_descriptions() {
        assert!(RiskLevel::Low.description().contains("Normal"));
        assert!(RiskLevel::Severe.description().contains("significant"));
    }

    #[test]
    fn test_risk_from_series() {
        let series = vec![json!(120.0), json!(80.5), json!(310.0)];
        let risk = FloodRisk::from_series(&series).expect("should summarize");

        assert_eq!(risk.level, RiskLevel::Moderate);
        assert!((risk.max_discharge - 310.0).abs() < f64::EPSILON);
        assert!((risk.mean_discharge - 170.166_666).abs() < 0.001);
    }

    #[test]
    fn test_risk_skips_null_entries() {
        let series = vec![json!(null), json!(1500.0), json!(null)];
        let risk = FloodRisk::from_series(&series).expect("should summarize");

        assert_eq!(risk.level, RiskLevel::Severe);
        assert!((risk.mean_discharge - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_risk_empty_series() {
        assert!(FloodRisk::from_series(&[]).is_none());
        assert!(FloodRisk::from_series(&[json!(null)]).is_none());
    }

    #[test]
    fn test_risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Moderate).expect("should serialize");
        assert_eq!(json, r#""moderate""#);
    }
}
