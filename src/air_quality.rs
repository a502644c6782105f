// Module containing the failure payload returned by AirVisual
mod response;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    config::Config,
    error::{AppError, LookupError},
};

// API endpoint for the AirVisual nearest city service
pub const NEAREST_CITY_ENDPOINT: &str = "https://api.airvisual.com/v2/nearest_city";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the AirVisual nearest city endpoint.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct AirQualityClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl AirQualityClient {
    /// Builds a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetches air quality data for a location.
    ///
    /// # Arguments
    /// * `city` - City name, sent as-is (e.g. "Los Angeles")
    /// * `state` - State or region name (e.g. "California")
    /// * `country` - Country name (e.g. "USA")
    ///
    /// # Returns
    /// * The response body exactly as the API returned it
    /// * `LookupError` describing why the lookup failed. The failure is logged before returning.
    pub async fn lookup(&self, city: &str, state: &str, country: &str) -> Result<Value, LookupError> {
        info!("Fetching air quality data for {}, {}, {}", city, state, country);

        let result = self.request(city, state, country).await;
        if let Err(e) = &result {
            error!("Error fetching air quality data: {}", e.detail());
        }
        result
    }

    /// Same as [`lookup`](Self::lookup) but collapses every failure to `None`.
    pub async fn lookup_or_none(&self, city: &str, state: &str, country: &str) -> Option<Value> {
        self.lookup(city, state, country).await.ok()
    }

    async fn request(&self, city: &str, state: &str, country: &str) -> Result<Value, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("city", city),
                ("state", state),
                ("country", country),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let data: Value = serde_json::from_str(&body)?;
            debug!("Air quality data fetched successfully: {:?}", data);
            Ok(data)
        } else {
            Err(LookupError::Status {
                status,
                message: response::FailureResponse::message_from(&body),
                body,
            })
        }
    }
}

/// Fetches air quality data for a location with a one-off client.
///
/// Returns `None` on any failure, including a client that cannot be built.
pub async fn get_air_quality(
    config: &Config,
    city: &str,
    state: &str,
    country: &str,
) -> Option<Value> {
    match AirQualityClient::new(config) {
        Ok(client) => client.lookup_or_none(city, state, country).await,
        Err(e) => {
            error!("Error fetching air quality data: {}", e);
            None
        }
    }
}
