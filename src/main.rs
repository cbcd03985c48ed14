use actix_web::HttpServer;
use current_weather_api::{AppState, LoggingConfig, ServerConfig, create_app};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    LoggingConfig::from_env().init();

    let server = ServerConfig::from_env();
    let state = AppState::from_env().map_err(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::io::Error::other(e)
    })?;

    tracing::info!(bind_address = %server.bind_address, "Server starting");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&server.bind_address)?
        .run()
        .await
}
