//! Errors raised while serving a current weather request.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// Any failure between receiving the query and building the response.
///
/// Every variant is reported to the caller the same way: status 500 with
/// an empty body. The message is only ever written to the logs.
#[derive(Debug, thiserror::Error)]
pub enum CurrentWeatherError {
    #[error("No location data available")]
    NoLocationData,

    #[error("Location lookup failed for {ip}: {message}")]
    LocationLookup { ip: String, message: String },

    #[error("Invalid upstream URL {url}: {message}")]
    InvalidUpstreamUrl { url: String, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{destination} returned status {status}")]
    UpstreamStatus { destination: String, status: u16 },

    #[error("Failed to decode response from {destination}: {source}")]
    Decode {
        destination: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ResponseError for CurrentWeatherError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    #[test]
    fn test_every_error_is_an_empty_500() {
        let decode_source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let errors = vec![
            CurrentWeatherError::NoLocationData,
            CurrentWeatherError::LocationLookup {
                ip: "10.0.0.1".to_string(),
                message: "private range".to_string(),
            },
            CurrentWeatherError::UpstreamStatus {
                destination: "api.openweathermap.org".to_string(),
                status: 401,
            },
            CurrentWeatherError::InvalidUpstreamUrl {
                url: "not a url".to_string(),
                message: "relative URL without a base".to_string(),
            },
            CurrentWeatherError::Decode {
                destination: "api.openweathermap.org".to_string(),
                source: decode_source,
            },
        ];

        for error in errors {
            let response = error.error_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = response.into_body().try_into_bytes().unwrap();
            assert!(body.is_empty(), "body should be empty for {error}");
        }
    }

    #[test]
    fn test_messages_carry_diagnostics() {
        let error = CurrentWeatherError::LocationLookup {
            ip: "192.0.2.1".to_string(),
            message: "reserved range".to_string(),
        };
        assert!(error.to_string().contains("192.0.2.1"));
        assert!(error.to_string().contains("reserved range"));

        assert_eq!(
            CurrentWeatherError::NoLocationData.to_string(),
            "No location data available"
        );
    }
}
