//! Current weather endpoint handler.

use crate::{
    handlers::AppState,
    models::CurrentWeatherData,
    services::{CurrentWeatherError, normalize},
    utils::forwarded_client_ip,
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Current weather endpoint
///
/// Forwards the query to the weather provider and returns the observation as
/// a flat document. Without `zip`, `q`, `lat` or `lon` the location is looked
/// up from the `X-Forwarded-For` header. Any failure is answered with an
/// empty 500.
#[api_v2_operation(
    summary = "Current Weather Endpoint",
    description = "Returns current weather conditions for a location given as ZIP code (?zip=94040,us), free text (?q=London) or coordinates (?lat=51.5&lon=-0.12). Without a location the caller's X-Forwarded-For address is geolocated. Units may be metric (default), imperial or standard.",
    tags("Weather")
)]
pub async fn current_weather(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<web::Json<CurrentWeatherData>, Error> {
    match fetch_current_weather(&req, &state).await {
        Ok(data) => Ok(web::Json(data)),
        Err(err) => {
            tracing::error!(
                error = %err,
                path = %req.path(),
                "Current weather request failed"
            );
            Err(err.into())
        }
    }
}

async fn fetch_current_weather(
    req: &HttpRequest,
    state: &AppState,
) -> Result<CurrentWeatherData, CurrentWeatherError> {
    let mut params = normalize(req.query_string());

    if !params.has_location() {
        let ip = forwarded_client_ip(req).ok_or(CurrentWeatherError::NoLocationData)?;
        let coordinates = state.location.resolve_coordinates(&ip).await?;
        tracing::debug!(
            ip = %ip,
            lat = coordinates.lat,
            lon = coordinates.lon,
            "Resolved location from client address"
        );
        params.set_coordinates(coordinates);
    }

    let raw = state.provider.fetch_current(&params).await?;

    Ok(CurrentWeatherData::from_raw(raw, params.units()))
}
