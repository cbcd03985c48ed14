//! Upstream service configuration: the weather provider and the IP
//! geolocation service.

use std::env;

const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_GEOLOCATION_BASE_URL: &str = "http://ip-api.com/json";

/// Configuration for the OpenWeatherMap client
#[derive(Clone)]
pub struct OpenWeatherConfig {
    /// API key sent as `appid`; an empty key is tolerated and left to the provider to reject
    pub api_key: String,
    pub base_url: String,
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_OPENWEATHER_BASE_URL.to_string(),
        }
    }
}

impl OpenWeatherConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let api_key = env::var("OPENWEATHER_API_KEY").unwrap_or_default();

        let base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENWEATHER_BASE_URL.to_string());

        Self { api_key, base_url }
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("api_key_set", &!self.api_key.is_empty())
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration for the IP geolocation client
#[derive(Debug, Clone)]
pub struct GeolocationConfig {
    pub base_url: String,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOLOCATION_BASE_URL.to_string(),
        }
    }
}

impl GeolocationConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("GEOLOCATION_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_GEOLOCATION_BASE_URL.to_string());

        Self { base_url }
    }
}
