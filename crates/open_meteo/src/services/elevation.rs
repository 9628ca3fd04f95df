//! Elevation service
//!
//! Wraps `api.open-meteo.com/v1/elevation`, a 90-metre digital
//! elevation model lookup. The single-purpose endpoint: coordinates in,
//! one elevation out, no other parameters.

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::{coords, error::Error, query::Query, transport::Transport};

const HOST: &str = "https://api.open-meteo.com";
const PATH: &str = "/v1/elevation";

/// Metres-to-feet conversion factor used by [`ElevationPoint`]
const FEET_PER_METRE: f64 = 3.280_84;

/// Terrain band derived from elevation above sea level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    /// Below 0 m
    BelowSeaLevel,
    /// 0 to 200 m
    Lowland,
    /// 200 to 500 m
    Plains,
    /// 500 to 1000 m
    Hills,
    /// 1000 to 2000 m
    Mountains,
    /// 2000 m and above
    HighMountains,
}

impl Terrain {
    /// Classify an elevation in metres into its terrain band
    #[must_use]
    pub fn classify(metres: f64) -> Self {
        if metres < 0.0 {
            Self::BelowSeaLevel
        } else if metres < 200.0 {
            Self::Lowland
        } else if metres < 500.0 {
            Self::Plains
        } else if metres < 1000.0 {
            Self::Hills
        } else if metres < 2000.0 {
            Self::Mountains
        } else {
            Self::HighMountains
        }
    }

    /// Get a human-readable description of the terrain band
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BelowSeaLevel => "Depression or underwater",
            Self::Lowland => "Coastal or low-lying",
            Self::Plains => "Flat or rolling plains",
            Self::Hills => "Hilly upland",
            Self::Mountains => "Mountainous",
            Self::HighMountains => "High altitude",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Elevation of a single point with derived units and terrain band
#[derive(Debug, Clone, Serialize)]
pub struct ElevationPoint {
    /// Latitude the elevation was looked up for
    pub latitude: f64,
    /// Longitude the elevation was looked up for
    pub longitude: f64,
    /// Elevation in metres above sea level
    pub metres: f64,
    /// Elevation in feet above sea level
    pub feet: f64,
    /// Terrain band for the elevation
    pub terrain: Terrain,
}

impl ElevationPoint {
    fn new(latitude: f64, longitude: f64, metres: f64) -> Self {
        Self {
            latitude,
            longitude,
            metres,
            feet: metres * FEET_PER_METRE,
            terrain: Terrain::classify(metres),
        }
    }
}

/// Client for the elevation API
#[derive(Debug, Clone)]
pub struct ElevationService {
    transport: Transport,
}

impl ElevationService {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Fetch the raw elevation response for a location
    ///
    /// The API answers with an `elevation` array holding one value per
    /// requested point.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn lookup(&self, latitude: f64, longitude: f64) -> Result<Value, Error> {
        coords::validate(latitude, longitude)?;

        let query = Query::for_location(latitude, longitude);
        self.transport.get_json(HOST, PATH, &query).await
    }

    /// Fetch the elevation of a location as a typed point
    ///
    /// Adds the feet conversion and terrain band on top of
    /// [`lookup`](Self::lookup).
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn point(&self, latitude: f64, longitude: f64) -> Result<ElevationPoint, Error> {
        let raw = self.lookup(latitude, longitude).await?;

        let metres = raw
            .pointer("/elevation/0")
            .and_then(Value::as_f64)
            .ok_or_else(|| Error::Decode("No elevation value in response".to_string()))?;

        Ok(ElevationPoint::new(latitude, longitude, metres))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_bands() {
        assert_eq!(Terrain::classify(-12.0), Terrain::BelowSeaLevel);
        assert_eq!(Terrain::classify(0.0), Terrain::Lowland);
        assert_eq!(Terrain::classify(199.9), Terrain::Lowland);
        assert_eq!(Terrain::classify(200.0), Terrain::Plains);
        assert_eq!(Terrain::classify(500.0), Terrain::Hills);
        assert_eq!(Terrain::classify(1000.0), Terrain::Mountains);
        assert_eq!(Terrain::classify(2000.0), Terrain::HighMountains);
        assert_eq!(Terrain::classify(8848.0), Terrain::HighMountains);
    }

    #[test]
    fn test_terrain_description() {
        assert_eq!(Terrain::Lowland.description(), "Coastal or low-lying");
        assert_eq!(format!("{}", Terrain::Mountains), "Mountainous");
    }

    #[test]
    fn test_terrain_serializes_snake_case() {
        let json = serde_json::to_string(&Terrain::HighMountains).expect("should serialize");
        assert_eq!(json, r#""high_mountains""#);
    }

    #[test]
    fn test_point_feet_conversion() {
        let point = ElevationPoint::new(27.99, 86.93, 100.0);
        assert!((point.feet - 328.084).abs() < 0.001);
        assert_eq!(point.terrain, Terrain::Lowland);
    }
}
