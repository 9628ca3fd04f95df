//! Service clients, one per Open-Meteo API family
//!
//! Every service is a thin struct over the shared [`Transport`]: it
//! validates input, assembles the query and returns the raw JSON body.
//! Responses are passed through unmodified so new upstream fields are
//! available without a crate update.
//!
//! [`Transport`]: crate::transport::Transport

pub mod air_quality;
pub mod climate;
pub mod elevation;
pub mod ensemble;
pub mod flood;
pub mod geocoding;
pub mod historical;
pub mod historical_forecast;
pub mod marine;
pub mod seasonal;
pub mod solar;
pub mod weather;

/// Timezone value sent when the caller does not pick one
pub(crate) const AUTO_TIMEZONE: &str = "auto";
