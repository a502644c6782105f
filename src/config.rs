use std::{env, fmt, time::Duration};

use crate::{air_quality::NEAREST_CITY_ENDPOINT, error::AppError};

/// Environment variable holding the AirVisual API key
pub const API_KEY_VAR: &str = "AIRVISUAL_API_KEY";
/// Optional override for the nearest city endpoint URL
pub const ENDPOINT_VAR: &str = "AIRVISUAL_ENDPOINT";
/// Optional request timeout in whole seconds
pub const TIMEOUT_VAR: &str = "AIRVISUAL_TIMEOUT_SECS";

/// Settings for the air quality client, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    /// `None` keeps reqwest's default behaviour
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: NEAREST_CITY_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// A missing or blank API key is an error; the other variables are optional.
    pub fn from_source<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::EnvVarNotSet(API_KEY_VAR.to_string()))?;

        let mut config = Config::new(api_key);

        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_endpoint(endpoint.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| AppError::InvalidConfig {
                name: TIMEOUT_VAR.to_string(),
                reason: format!("expected a whole number of seconds, got {:?}", raw),
            })?;
            if secs == 0 {
                return Err(AppError::InvalidConfig {
                    name: TIMEOUT_VAR.to_string(),
                    reason: "timeout must be greater than zero".to_string(),
                });
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let result = Config::from_source(source(&[]));
        assert!(matches!(result, Err(AppError::EnvVarNotSet(name)) if name == API_KEY_VAR));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let result = Config::from_source(source(&[(API_KEY_VAR, "   ")]));
        assert!(matches!(result, Err(AppError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_source(source(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.endpoint, NEAREST_CITY_ENDPOINT);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_source(source(&[
            (API_KEY_VAR, "secret"),
            (ENDPOINT_VAR, "http://localhost:8080/v2/nearest_city"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/v2/nearest_city");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = Config::from_source(source(&[(API_KEY_VAR, "secret"), (TIMEOUT_VAR, "soon")]));
        assert!(matches!(result, Err(AppError::InvalidConfig { name, .. }) if name == TIMEOUT_VAR));

        let result = Config::from_source(source(&[(API_KEY_VAR, "secret"), (TIMEOUT_VAR, "0")]));
        assert!(matches!(result, Err(AppError::InvalidConfig { .. })));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", Config::new("super-secret-key"));
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
