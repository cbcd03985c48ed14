//! Shared outbound request helper for upstream JSON APIs.
//!
//! Issues a single GET per call. There are no retries; failures are returned
//! to the caller as [`CurrentWeatherError`].

use crate::services::error::CurrentWeatherError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{error, info, warn};

/// Host portion of a URL, used to label logs and errors
pub fn extract_destination(url: &str) -> String {
    url::Url::parse(url)
        .map(|u| u.host_str().unwrap_or("unknown").to_string())
        .unwrap_or_else(|_| "invalid_url".to_string())
}

/// GET `url` with `query` and decode a JSON body into `T`
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(String, String)],
) -> Result<T, CurrentWeatherError> {
    let destination = extract_destination(url);
    let start = Instant::now();

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| network_error(&destination, start, e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| network_error(&destination, start, e))?;

    if !status.is_success() {
        warn!(
            destination = %destination,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Request failed with unsuccessful status"
        );
        return Err(CurrentWeatherError::UpstreamStatus {
            destination,
            status: status.as_u16(),
        });
    }

    info!(
        destination = %destination,
        status = status.as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed successfully"
    );

    serde_json::from_str(&body).map_err(|source| CurrentWeatherError::Decode {
        destination,
        source,
    })
}

fn network_error(destination: &str, start: Instant, e: reqwest::Error) -> CurrentWeatherError {
    error!(
        destination = %destination,
        error = %e,
        duration_ms = start.elapsed().as_millis(),
        "Request failed with network error"
    );
    CurrentWeatherError::Network(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_extract_destination() {
        assert_eq!(
            extract_destination("https://api.openweathermap.org/data/2.5/weather"),
            "api.openweathermap.org"
        );
        assert_eq!(extract_destination("invalid_url"), "invalid_url");
    }

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/thing"))
            .and(query_param("a", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&mock_server)
            .await;

        let url = format!("{}/thing", mock_server.uri());
        let value: serde_json::Value = get_json(
            &Client::new(),
            &url,
            &[("a".to_string(), "1".to_string())],
        )
        .await
        .unwrap();

        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    async fn test_get_json_reports_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result: Result<serde_json::Value, _> =
            get_json(&Client::new(), &mock_server.uri(), &[]).await;

        assert!(matches!(
            result,
            Err(CurrentWeatherError::UpstreamStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_get_json_reports_truncated_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            // Promise more body than is sent, then hang up
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\n{\"ok\"")
                .await;
        });

        let result: Result<serde_json::Value, _> =
            get_json(&Client::new(), &format!("http://{addr}/"), &[]).await;

        assert!(matches!(result, Err(CurrentWeatherError::Network(_))));
    }

    #[tokio::test]
    async fn test_get_json_reports_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result: Result<serde_json::Value, _> =
            get_json(&Client::new(), &mock_server.uri(), &[]).await;

        assert!(matches!(result, Err(CurrentWeatherError::Decode { .. })));
    }
}
