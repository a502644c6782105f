//! Client for the AirVisual "nearest city" air quality endpoint.
//!
//! [`AirQualityClient::lookup`] returns the response body or a typed [`LookupError`];
//! [`AirQualityClient::lookup_or_none`] and [`get_air_quality`] collapse every failure to `None`.

pub mod air_quality;
pub mod config;
pub mod error;

pub use air_quality::{AirQualityClient, NEAREST_CITY_ENDPOINT, get_air_quality};
pub use config::Config;
pub use error::{AppError, LookupError};
