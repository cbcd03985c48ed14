//! OpenAPI specification generation and app factory.

use crate::{
    config::{GeolocationConfig, HttpClientConfig, OpenWeatherConfig},
    handlers::current_weather,
    middleware::RequestIdMiddleware,
    services::{IpApiLocationService, LocationService, OpenWeatherClient, WeatherProvider},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};
use std::sync::Arc;

/// Collaborators shared by every request
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub location: Arc<dyn LocationService>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>, location: Arc<dyn LocationService>) -> Self {
        Self { provider, location }
    }

    /// Build the production collaborators from environment configuration
    pub fn from_env() -> Result<Self, reqwest::Error> {
        let client = HttpClientConfig::from_env().build_client()?;

        let provider = OpenWeatherClient::new(client.clone(), OpenWeatherConfig::from_env());
        let location = IpApiLocationService::new(client, GeolocationConfig::from_env());

        Ok(Self::new(Arc::new(provider), Arc::new(location)))
    }
}

/// Creates the OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Current Weather API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Normalizes current weather queries and forwards them to OpenWeatherMap.\n\n\
                ## Location\n\
                Supply one of `zip`, `q` or `lat`/`lon`. Without any of them the \
                caller's `X-Forwarded-For` address is geolocated.\n\
                \n\
                ## Units\n\
                `metric` (default), `imperial` or `standard`. Unknown values fall back to `metric`.\n\
                \n\
                ## Errors\n\
                Every failure is reported as status 500 with an empty body."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the app with the given collaborators
///
/// Used by `main` with production clients and by tests with substitutes.
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(state))
        .service(web::resource("/api/current").route(web::get().to(current_weather)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
