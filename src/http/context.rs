//! Framework-independent request context.
//!
//! Logging and error shaping consume this value object instead of axum's
//! request types, so those components stay decoupled from the host
//! framework.

use axum::extract::ConnectInfo;
use axum::http::request::Parts;
use serde_json::Value;
use std::net::SocketAddr;
use std::time::Instant;

/// Snapshot of one incoming request, captured before the handler runs.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub client_ip: String,
    /// Route parameters. The exposed surface declares none, kept for the
    /// fixed record shape.
    pub params: Value,
    /// Raw query string, verbatim.
    pub query: String,
    /// Request body decoded as UTF-8 (lossy), verbatim.
    pub body: String,
    /// Header map as a JSON object, values verbatim.
    pub headers: Value,
    /// Arrival instant, used for elapsed-time reporting.
    pub received_at: Instant,
}

impl RequestContext {
    /// Capture the context from decomposed request parts and the buffered
    /// body bytes.
    pub fn from_parts(parts: &Parts, body: &[u8]) -> Self {
        let client_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let headers: serde_json::Map<String, Value> = parts
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    Value::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
                )
            })
            .collect();

        Self {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            client_ip,
            params: Value::Object(serde_json::Map::new()),
            query: parts.uri.query().unwrap_or("").to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
            headers: Value::Object(headers),
            received_at: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the request arrived.
    pub fn elapsed_ms(&self) -> u128 {
        self.received_at.elapsed().as_millis()
    }

    #[cfg(test)]
    pub(crate) fn for_tests(
        method: &str,
        path: &str,
        client_ip: &str,
        body: &str,
        query: &str,
        headers_json: &str,
    ) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            client_ip: client_ip.to_string(),
            params: serde_json::json!({}),
            query: query.to_string(),
            body: body.to_string(),
            headers: serde_json::from_str(headers_json).unwrap(),
            received_at: Instant::now(),
        }
    }
}
