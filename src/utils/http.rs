//! HTTP utility functions for extracting request information.

use actix_web::HttpRequest;

/// Header carrying the originating client address when behind a proxy
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Extract the client IP from a single `X-Forwarded-For` header.
///
/// Returns `None` when the header is absent, repeated, not valid text, or
/// blank. The value is otherwise used as-is.
pub fn forwarded_client_ip(req: &HttpRequest) -> Option<String> {
    let mut values = req.headers().get_all(FORWARDED_FOR_HEADER);

    let value = values.next()?;
    if values.next().is_some() {
        return None;
    }

    let ip = value.to_str().ok()?.trim();
    if ip.is_empty() {
        return None;
    }

    Some(ip.to_string())
}

/// Peer address of the connection, for request logs
pub fn peer_address(req: &HttpRequest) -> String {
    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}
