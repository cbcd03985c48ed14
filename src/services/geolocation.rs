//! IP geolocation seam and its ip-api.com implementation.

use crate::config::GeolocationConfig;
use crate::models::Coordinates;
use crate::services::error::CurrentWeatherError;
use crate::services::upstream::get_json;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Maps a client IP address to a geographic position
#[async_trait]
pub trait LocationService: Send + Sync {
    async fn resolve_coordinates(&self, ip: &str) -> Result<Coordinates, CurrentWeatherError>;
}

/// ip-api.com JSON response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Client for the ip-api.com JSON endpoint
pub struct IpApiLocationService {
    client: Client,
    base_url: String,
}

impl IpApiLocationService {
    pub fn new(client: Client, config: GeolocationConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LocationService for IpApiLocationService {
    async fn resolve_coordinates(&self, ip: &str) -> Result<Coordinates, CurrentWeatherError> {
        let mut url = url::Url::parse(&self.base_url).map_err(|e| {
            CurrentWeatherError::InvalidUpstreamUrl {
                url: self.base_url.clone(),
                message: e.to_string(),
            }
        })?;
        url.path_segments_mut()
            .map_err(|_| CurrentWeatherError::InvalidUpstreamUrl {
                url: self.base_url.clone(),
                message: "cannot be a base".to_string(),
            })?
            .push(ip);

        let query = [("fields".to_string(), "status,message,lat,lon".to_string())];
        let response: IpApiResponse = get_json(&self.client, url.as_str(), &query).await?;

        match response {
            IpApiResponse {
                status,
                lat: Some(lat),
                lon: Some(lon),
                ..
            } if status == "success" => Ok(Coordinates { lat, lon }),
            IpApiResponse { message, .. } => Err(CurrentWeatherError::LocationLookup {
                ip: ip.to_string(),
                message: message.unwrap_or_else(|| "no location for address".to_string()),
            }),
        }
    }
}
