#![forbid(unsafe_code)]
//! Open-Meteo API client
//!
//! Async client for the Open-Meteo family of weather APIs
//! (<https://open-meteo.com>): forecast, historical archive, geocoding,
//! air quality, climate projections, flood, marine, elevation, solar,
//! ensemble and seasonal endpoints. No API key is required for the
//! free tier.
//!
//! # Architecture
//!
//! [`OpenMeteo`] is a facade over twelve independent domain services,
//! one per upstream API family, all sharing a single HTTP transport.
//! Services validate coordinates before any request goes out, assemble
//! query parameters and return the upstream JSON unmodified as
//! [`serde_json::Value`] — the response schema is owned by the API,
//! not this crate. A few convenience methods (current conditions,
//! river discharge, elevation points) add typed summaries on top.
//!
//! Failures map onto [`Error`]: pre-flight validation, an upstream
//! error status, a transport failure without a response, or an
//! undecodable body. Nothing is retried internally.
//!
//! # Example
//!
//! ```rust,ignore
//! use open_meteo::{ForecastParams, OpenMeteo};
//!
//! let client = OpenMeteo::with_defaults()?;
//!
//! let params = ForecastParams {
//!     daily: Some(vec!["temperature_2m_max".into()]),
//!     forecast_days: Some(7),
//!     ..Default::default()
//! };
//! let forecast = client.weather().forecast(52.52, 13.41, &params).await?;
//! println!("{}", forecast["daily"]["temperature_2m_max"]);
//! ```

mod config;
mod coords;
mod error;
mod query;
pub mod services;
mod transport;

pub use config::ClientConfig;
pub use error::Error;
pub use services::{
    air_quality::{AirQualityParams, AirQualityService},
    climate::{ClimateParams, ClimateService, DEFAULT_CLIMATE_MODEL},
    elevation::{ElevationPoint, ElevationService, Terrain},
    ensemble::{EnsembleParams, EnsembleService},
    flood::{
        DISCHARGE_VARIABLES, DischargeOutlook, FloodParams, FloodRisk, FloodService, RiskLevel,
    },
    geocoding::{DEFAULT_COUNT, DEFAULT_LANGUAGE, GeocodingService, SearchParams},
    historical::{HistoricalParams, HistoricalService},
    historical_forecast::{HistoricalForecastParams, HistoricalForecastService},
    marine::{MarineParams, MarineService},
    seasonal::{DEFAULT_SEASONAL_DAILY, SeasonalParams, SeasonalService},
    solar::{RADIATION_DAILY_VARIABLES, RADIATION_HOURLY_VARIABLES, SolarParams, SolarService},
    weather::{CURRENT_VARIABLES, ForecastParams, UnitSystem, WeatherService},
};
pub use transport::USER_AGENT;

use std::sync::Arc;

use transport::Transport;

/// Facade over all Open-Meteo domain services
///
/// Constructed once and reused; every service shares the same HTTP
/// connection pool. Construction performs no I/O.
#[derive(Debug, Clone)]
pub struct OpenMeteo {
    config: ClientConfig,
    weather: WeatherService,
    historical: HistoricalService,
    historical_forecast: HistoricalForecastService,
    geocoding: GeocodingService,
    air_quality: AirQualityService,
    climate: ClimateService,
    flood: FloodService,
    marine: MarineService,
    elevation: ElevationService,
    solar: SolarService,
    ensemble: EnsembleService,
    seasonal: SeasonalService,
}

impl OpenMeteo {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = Transport::new(&config)?;

        Ok(Self {
            weather: WeatherService::new(transport.clone()),
            historical: HistoricalService::new(transport.clone()),
            historical_forecast: HistoricalForecastService::new(transport.clone()),
            geocoding: GeocodingService::new(transport.clone()),
            air_quality: AirQualityService::new(transport.clone()),
            climate: ClimateService::new(transport.clone()),
            flood: FloodService::new(transport.clone()),
            marine: MarineService::new(transport.clone()),
            elevation: ElevationService::new(transport.clone()),
            solar: SolarService::new(transport.clone()),
            ensemble: EnsembleService::new(transport.clone()),
            seasonal: SeasonalService::new(transport),
            config,
        })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(ClientConfig::default())
    }

    /// Create a shareable client wrapped in Arc
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new_shared(config: ClientConfig) -> Result<Arc<Self>, Error> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// Configuration the client was constructed with
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Weather forecasts (`api.open-meteo.com/v1/forecast`)
    #[must_use]
    pub const fn weather(&self) -> &WeatherService {
        &self.weather
    }

    /// Historical weather archive (`archive-api.open-meteo.com/v1/archive`)
    #[must_use]
    pub const fn historical(&self) -> &HistoricalService {
        &self.historical
    }

    /// Archived forecast runs (`historical-forecast-api.open-meteo.com/v1/forecast`)
    #[must_use]
    pub const fn historical_forecast(&self) -> &HistoricalForecastService {
        &self.historical_forecast
    }

    /// Place-name search (`geocoding-api.open-meteo.com/v1/search`)
    #[must_use]
    pub const fn geocoding(&self) -> &GeocodingService {
        &self.geocoding
    }

    /// Air quality forecasts (`air-quality-api.open-meteo.com/v1/air-quality`)
    #[must_use]
    pub const fn air_quality(&self) -> &AirQualityService {
        &self.air_quality
    }

    /// Climate projections (`climate-api.open-meteo.com/v1/climate`)
    #[must_use]
    pub const fn climate(&self) -> &ClimateService {
        &self.climate
    }

    /// River discharge forecasts (`flood-api.open-meteo.com/v1/flood`)
    #[must_use]
    pub const fn flood(&self) -> &FloodService {
        &self.flood
    }

    /// Marine forecasts (`marine-api.open-meteo.com/v1/marine`)
    #[must_use]
    pub const fn marine(&self) -> &MarineService {
        &self.marine
    }

    /// Elevation lookup (`api.open-meteo.com/v1/elevation`)
    #[must_use]
    pub const fn elevation(&self) -> &ElevationService {
        &self.elevation
    }

    /// Solar radiation forecasts (`api.open-meteo.com/v1/forecast`)
    #[must_use]
    pub const fn solar(&self) -> &SolarService {
        &self.solar
    }

    /// Ensemble forecasts (`ensemble-api.open-meteo.com/v1/ensemble`)
    #[must_use]
    pub const fn ensemble(&self) -> &EnsembleService {
        &self.ensemble
    }

    /// Seasonal forecasts (`seasonal-api.open-meteo.com/v1/seasonal`)
    #[must_use]
    pub const fn seasonal(&self) -> &SeasonalService {
        &self.seasonal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_with_defaults() {
        let client = OpenMeteo::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_keeps_config() {
        let config = ClientConfig {
            api_key: Some("commercial-key".to_string()),
            timeout_ms: 2_500,
            ..ClientConfig::default()
        };

        let client = OpenMeteo::new(config).expect("should build");
        assert_eq!(client.config().api_key.as_deref(), Some("commercial-key"));
        assert_eq!(client.config().timeout_ms, 2_500);
    }

    #[test]
    fn test_shared_client() {
        let client = OpenMeteo::new_shared(ClientConfig::default()).expect("should build");
        let clone = Arc::clone(&client);
        assert_eq!(Arc::strong_count(&clone), 2);
    }
}
