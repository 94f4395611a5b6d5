//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Build the axum router under the fixed `/api/v1` base path
//! - Wire up middleware (tracing, timeout, request logging)
//! - Dispatch `POST /contract` into the submission pipeline
//! - Expose a liveness check at `GET /health`

use axum::extract::{Extension, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::blockchain::RpcClient;
use crate::config::schema::{Environment, Secrets, BASE_PATH, REQUEST_TIMEOUT_SECS};
use crate::greeting::GreetingService;
use crate::http::context::RequestContext;
use crate::http::error::ApiError;
use crate::http::middleware::request_logger;

/// Application state injected into handlers.
///
/// Holds only immutable values; every submission loads its own secrets.
#[derive(Clone)]
pub struct AppState {
    pub service: GreetingService,
    pub environment: Environment,
}

/// HTTP server for the greeting relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server for the given environment.
    pub fn new(environment: Environment) -> Self {
        let state = AppState {
            service: GreetingService::new(),
            environment,
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let api = Router::new()
            .route("/contract", post(create_greeting))
            .route("/health", get(health));

        Router::new()
            .nest(BASE_PATH, api)
            .fallback(not_found)
            .layer(axum::middleware::from_fn_with_state(
                state.clone(),
                request_logger,
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, base_path = BASE_PATH, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateGreetingRequest {
    pub greeting: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGreetingResponse {
    pub transaction_hash: String,
}

/// `POST /api/v1/contract`: submit one greeting to the contract.
async fn create_greeting(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    headers: HeaderMap,
) -> Response {
    if !has_json_content_type(&headers) {
        return ApiError::unsupported_media_type().into_response_with(&ctx, state.environment);
    }

    let payload: CreateGreetingRequest = match serde_json::from_str(&ctx.body) {
        Ok(payload) => payload,
        Err(e) => {
            return ApiError::bad_request(format!("invalid request body: {}", e))
                .into_response_with(&ctx, state.environment);
        }
    };

    match state.service.create_greeting(&payload.greeting).await {
        Ok(hash) => (
            StatusCode::OK,
            Json(CreateGreetingResponse {
                transaction_hash: hash.to_string(),
            }),
        )
            .into_response(),
        Err(err) => ApiError::from_submit(&err).into_response_with(&ctx, state.environment),
    }
}

/// `GET /api/v1/health`: liveness check.
///
/// Reports RPC reachability without failing the check over it; a missing
/// secrets bundle degrades the service.
async fn health() -> Response {
    let secrets = match Secrets::from_env() {
        Ok(secrets) => secrets,
        Err(_) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded" })),
            )
                .into_response();
        }
    };

    let rpc_healthy = match RpcClient::new(&secrets.rpc_url) {
        Ok(client) => client.is_healthy().await,
        Err(_) => false,
    };

    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "rpcHealthy": rpc_healthy })),
    )
        .into_response()
}

/// Fallback for unknown routes, shaped like every other error.
async fn not_found(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    ApiError::not_found(&ctx.path).into_response_with(&ctx, state.environment)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/json")
        })
        .unwrap_or(false)
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_json_content_type() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!has_json_content_type(&headers));
    }

    #[test]
    fn test_response_body_field_name() {
        let body = CreateGreetingResponse {
            transaction_hash: "0xabc".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["transactionHash"], "0xabc");
    }
}
