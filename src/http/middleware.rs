//! Per-request logging middleware.
//!
//! Buffers the body, captures the [`RequestContext`], and emits exactly
//! one completion line when the response is finished. The context is also
//! stored as a request extension so handlers and the error path reuse the
//! same snapshot.

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::config::schema::MAX_BODY_BYTES;
use crate::http::context::RequestContext;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::observability::logging::{emit_completion, LogRecord};

pub async fn request_logger(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            let ctx = RequestContext::from_parts(&parts, b"");
            return ApiError::payload_too_large().into_response_with(&ctx, state.environment);
        }
    };

    let ctx = RequestContext::from_parts(&parts, &bytes);
    let mut request = Request::from_parts(parts, Body::from(bytes));
    request.extensions_mut().insert(ctx.clone());

    let response = next.run(request).await;

    let status = response.status();
    let record = LogRecord {
        method: &ctx.method,
        path: &ctx.path,
        status: status.as_u16(),
        message: if status.is_client_error() || status.is_server_error() {
            status.canonical_reason()
        } else {
            None
        },
        elapsed_ms: ctx.elapsed_ms(),
    };
    emit_completion(&record);

    response
}
