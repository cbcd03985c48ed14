//! Current Weather API - normalizes current weather queries and forwards
//! them to OpenWeatherMap.
//!
//! A request flows through four steps:
//! - the query string is normalized and `units` validated
//! - when no location is given, the caller's forwarded IP is geolocated
//! - the weather provider is queried
//! - the nested provider response is flattened into [`CurrentWeatherData`]
//!
//! Any failure along the way is logged and answered with an empty 500.
//!
//! ## Architecture
//!
//! - `models/` - query parameters, provider payloads and the response model
//! - `handlers/` - the endpoint handler and the app factory
//! - `middleware/` - request ID tagging and request logging
//! - `services/` - normalization, upstream clients and errors
//! - `utils/` - request inspection helpers
//! - `config/` - environment-driven configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use current_weather_api::{AppState, create_app};
//! use actix_web::HttpServer;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let state = AppState::from_env().map_err(std::io::Error::other)?;
//!     HttpServer::new(move || create_app(state.clone()))
//!         .bind("127.0.0.1:8080")?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{GeolocationConfig, HttpClientConfig, LoggingConfig, OpenWeatherConfig, ServerConfig};
pub use handlers::{AppState, create_app, create_openapi_spec, current_weather};
pub use middleware::RequestIdMiddleware;
pub use models::{
    Coordinates, CurrentWeatherData, ProviderParams, QueryValue, RawQuery, RawWeatherResponse,
    Units, WeatherCondition,
};
pub use services::{
    CurrentWeatherError, IpApiLocationService, LocationService, OpenWeatherClient,
    WeatherProvider, normalize,
};
pub use utils::forwarded_client_ip;
