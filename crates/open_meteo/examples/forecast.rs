//! End-to-end demo against the live Open-Meteo API
//!
//! Run with `cargo run --example forecast`. Uses the free tier, no API
//! key required.

#![allow(clippy::print_stdout)]

use open_meteo::{Error, ForecastParams, OpenMeteo, SearchParams, UnitSystem};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "open_meteo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = OpenMeteo::with_defaults()?;

    // Resolve a place name to coordinates
    let places = client
        .geocoding()
        .search("Berlin", &SearchParams::default())
        .await?;
    let place = &places["results"][0];
    let (lat, lon) = (
        place["latitude"].as_f64().unwrap_or(52.52),
        place["longitude"].as_f64().unwrap_or(13.41),
    );
    println!("{} -> {lat}, {lon}", place["name"]);

    // Current conditions
    let current = client.weather().current(lat, lon, UnitSystem::Metric).await?;
    println!(
        "Now: {}°C, wind {} km/h",
        current["current"]["temperature_2m"], current["current"]["wind_speed_10m"]
    );

    // Seven-day forecast
    let params = ForecastParams {
        daily: Some(vec![
            "temperature_2m_max".to_string(),
            "temperature_2m_min".to_string(),
        ]),
        forecast_days: Some(7),
        ..Default::default()
    };
    let forecast = client.weather().forecast(lat, lon, &params).await?;
    println!(
        "Next days max: {}",
        forecast["daily"]["temperature_2m_max"]
    );

    // Typed elevation lookup
    let point = client.elevation().point(lat, lon).await?;
    println!(
        "Elevation: {:.0} m ({:.0} ft), {}",
        point.metres, point.feet, point.terrain
    );

    Ok(())
}
