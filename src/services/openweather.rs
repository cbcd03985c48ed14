//! Weather provider seam and its OpenWeatherMap implementation.

use crate::config::OpenWeatherConfig;
use crate::models::{ProviderParams, RawWeatherResponse};
use crate::services::error::CurrentWeatherError;
use crate::services::upstream::get_json;
use async_trait::async_trait;
use reqwest::Client;

/// Source of current weather observations
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_current(
        &self,
        params: &ProviderParams,
    ) -> Result<RawWeatherResponse, CurrentWeatherError>;
}

/// Client for the OpenWeatherMap "current weather" API
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(client: Client, config: OpenWeatherConfig) -> Self {
        Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current(
        &self,
        params: &ProviderParams,
    ) -> Result<RawWeatherResponse, CurrentWeatherError> {
        let url = format!("{}/weather", self.base_url);

        let mut query = params.to_query_pairs();
        query.retain(|(key, _)| key != "appid");
        query.push(("appid".to_string(), self.api_key.clone()));

        get_json(&self.client, &url, &query).await
    }
}
