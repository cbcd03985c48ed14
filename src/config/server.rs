//! Server bind configuration.

use std::env;
use std::path::Path;

const LOCAL_BIND_ADDRESS: &str = "127.0.0.1:8080";
const CONTAINER_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Configuration for the HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl ServerConfig {
    /// Use `BIND_ADDRESS` when set, otherwise bind all interfaces inside a
    /// container and localhost everywhere else
    pub fn from_env() -> Self {
        let bind_override = env::var("BIND_ADDRESS").ok();
        let in_container = is_container_environment(
            env::var("KUBERNETES_SERVICE_HOST").ok().as_deref(),
            env::var("DOCKER_CONTAINER").ok().as_deref(),
            Path::new("/.dockerenv").exists(),
        );

        Self {
            bind_address: detect_bind_address(bind_override.as_deref(), in_container),
        }
    }
}

fn is_container_environment(
    k8s_service_host: Option<&str>,
    docker_container: Option<&str>,
    dockerenv_exists: bool,
) -> bool {
    k8s_service_host.is_some() || docker_container.is_some() || dockerenv_exists
}

fn detect_bind_address(bind_override: Option<&str>, in_container: bool) -> String {
    match bind_override {
        Some(bind) if !bind.trim().is_empty() => bind.trim().to_string(),
        _ if in_container => CONTAINER_BIND_ADDRESS.to_string(),
        _ => LOCAL_BIND_ADDRESS.to_string(),
    }
}
