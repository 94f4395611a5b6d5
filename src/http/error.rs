//! Error classification and response shaping.
//!
//! # Responsibilities
//! - Shape every error into one consistent JSON body
//! - Classify failures against a fixed, ordered taxonomy (first match
//!   wins, ties broken by declaration order)
//! - Emit the failure log pair (summary + detail) through the shared
//!   emitter
//!
//! Pipeline failures collapse to a single bad-request kind at this
//! boundary regardless of their root cause; the cause chain is kept for
//! logs and, in development, for the `stackTrace` field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::schema::Environment;
use crate::greeting::SubmitError;
use crate::http::context::RequestContext;
use crate::observability::logging::{emit_failure, LogRecord};

/// Externally visible error body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    /// ISO-8601 timestamp of the failure.
    pub timestamp: String,
    pub path: String,
    pub message: String,
    /// Present only for recognized failures (pipeline errors with a known
    /// taxonomy kind).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    /// Rendered cause chain; exposed only in development.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

/// Predicate over an HTTP status, one per taxonomy entry.
pub type Predicate = fn(StatusCode) -> bool;

fn is_bad_request(status: StatusCode) -> bool {
    status == StatusCode::BAD_REQUEST
}
fn is_not_found(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND
}
fn is_unauthorized(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED
}
fn is_forbidden(status: StatusCode) -> bool {
    status == StatusCode::FORBIDDEN
}
fn is_internal_server_error(status: StatusCode) -> bool {
    status == StatusCode::INTERNAL_SERVER_ERROR
}
fn is_conflict(status: StatusCode) -> bool {
    status == StatusCode::CONFLICT
}
fn is_unsupported_media_type(status: StatusCode) -> bool {
    status == StatusCode::UNSUPPORTED_MEDIA_TYPE
}
fn is_payload_too_large(status: StatusCode) -> bool {
    status == StatusCode::PAYLOAD_TOO_LARGE
}

/// Fixed, ordered classification taxonomy. Evaluated front to back; the
/// first matching entry's name is the one recorded.
pub const TAXONOMY: &[(&str, Predicate)] = &[
    ("BadRequest", is_bad_request),
    ("NotFound", is_not_found),
    ("Unauthorized", is_unauthorized),
    ("Forbidden", is_forbidden),
    ("InternalServerError", is_internal_server_error),
    ("Conflict", is_conflict),
    ("UnsupportedMediaType", is_unsupported_media_type),
    ("PayloadTooLarge", is_payload_too_large),
];

/// Classify a status against an explicit taxonomy table.
pub fn classify_with(
    taxonomy: &[(&'static str, Predicate)],
    status: StatusCode,
) -> Option<&'static str> {
    taxonomy
        .iter()
        .find(|(_, predicate)| predicate(status))
        .map(|(name, _)| *name)
}

/// Classify a status against the fixed taxonomy.
pub fn classify(status: StatusCode) -> Option<&'static str> {
    classify_with(TAXONOMY, status)
}

/// Render an error and its transitive sources as one line.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// An error ready to be shaped into a response.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Structured detail, present for recognized failures.
    pub detail: Option<Value>,
    /// Full cause chain for diagnostics.
    pub cause: Option<String>,
}

impl ApiError {
    /// Build an error for a status the taxonomy recognizes, carrying the
    /// structured detail the body's `error` field expects.
    fn recognized(status: StatusCode, message: String) -> Self {
        let detail = json!({
            "statusCode": status.as_u16(),
            "message": message,
            "error": status.canonical_reason().unwrap_or("Error"),
        });
        Self {
            status,
            message,
            detail: Some(detail),
            cause: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::recognized(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn not_found(path: &str) -> Self {
        Self::recognized(StatusCode::NOT_FOUND, format!("Cannot find resource {}", path))
    }

    pub fn unsupported_media_type() -> Self {
        Self::recognized(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected content type application/json".to_string(),
        )
    }

    pub fn payload_too_large() -> Self {
        Self::recognized(
            StatusCode::PAYLOAD_TOO_LARGE,
            "request body too large".to_string(),
        )
    }

    /// Fallback for failures the taxonomy does not recognize.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
            detail: None,
            cause: None,
        }
    }

    /// Collapse a pipeline failure into the single client-facing kind.
    ///
    /// Whatever step failed, the caller sees a bad request; the tagged
    /// kind and cause chain go to `detail`/`cause` for diagnostics only.
    pub fn from_submit(err: &SubmitError) -> Self {
        let chain = error_chain(err);
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
            detail: Some(json!({ "kind": err.kind(), "cause": chain })),
            cause: Some(chain),
        }
    }

    /// Build the response body and emit the failure log pair.
    pub fn into_response_with(self, ctx: &RequestContext, environment: Environment) -> Response {
        let elapsed_ms = ctx.elapsed_ms();

        if let Some(category) = classify(self.status) {
            tracing::error!("{} Exception", category);
        }

        let log_message = self.cause.as_deref().unwrap_or(&self.message);
        let record = LogRecord {
            method: &ctx.method,
            path: &ctx.path,
            status: self.status.as_u16(),
            message: Some(log_message),
            elapsed_ms,
        };
        emit_failure(&record, ctx);

        let body = ErrorResponse {
            status_code: self.status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            path: ctx.path.clone(),
            message: self.message,
            error: self.detail,
            stack_trace: if environment.is_development() {
                self.cause
            } else {
                None
            },
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::ChainError;
    use crate::fees::FeeOracleError;

    #[test]
    fn test_classify_fixed_taxonomy() {
        assert_eq!(classify(StatusCode::BAD_REQUEST), Some("BadRequest"));
        assert_eq!(classify(StatusCode::NOT_FOUND), Some("NotFound"));
        assert_eq!(
            classify(StatusCode::PAYLOAD_TOO_LARGE),
            Some("PayloadTooLarge")
        );
        // Statuses outside the taxonomy stay unclassified
        assert_eq!(classify(StatusCode::SERVICE_UNAVAILABLE), None);
    }

    #[test]
    fn test_first_declared_predicate_wins_on_double_match() {
        fn matches_everything(_: StatusCode) -> bool {
            true
        }
        // Fabricated table where both entries match the same status:
        // declaration order decides, deterministically.
        let table: &[(&str, Predicate)] = &[
            ("BadRequest", matches_everything),
            ("NotFound", matches_everything),
        ];
        assert_eq!(classify_with(table, StatusCode::NOT_FOUND), Some("BadRequest"));
    }

    #[test]
    fn test_error_chain_renders_all_causes() {
        let err = SubmitError::Broadcast(ChainError::Broadcast(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "peer reset",
        ))));
        let chain = error_chain(&err);
        assert!(chain.starts_with("transaction broadcast failed"));
        assert!(chain.contains("broadcast failed"));
        assert!(chain.contains("peer reset"));
    }

    #[test]
    fn test_recognized_constructors_carry_structured_detail() {
        let api = ApiError::not_found("/api/v2/contract");
        let detail = api.detail.unwrap();
        assert_eq!(detail["statusCode"], 404);
        assert_eq!(detail["error"], "Not Found");
        assert_eq!(detail["message"], "Cannot find resource /api/v2/contract");

        let api = ApiError::unsupported_media_type();
        let detail = api.detail.unwrap();
        assert_eq!(detail["statusCode"], 415);
        assert_eq!(detail["error"], "Unsupported Media Type");

        // The unrecognized fallback stays bare
        assert!(ApiError::internal().detail.is_none());
    }

    #[test]
    fn test_from_submit_collapses_to_bad_request() {
        let err = SubmitError::FeeOracle(FeeOracleError::Status(503));
        let api = ApiError::from_submit(&err);
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        let detail = api.detail.unwrap();
        assert_eq!(detail["kind"], "FeeOracleError");
        assert!(detail["cause"].as_str().unwrap().contains("503"));
    }

    #[test]
    fn test_stack_trace_only_in_development() {
        let serialize = |environment: Environment| {
            let body = ErrorResponse {
                status_code: 400,
                timestamp: chrono::Utc::now().to_rfc3339(),
                path: "/api/v1/contract".to_string(),
                message: "transaction build failed".to_string(),
                error: None,
                stack_trace: if environment.is_development() {
                    Some("transaction build failed: rpc error".to_string())
                } else {
                    None
                },
            };
            serde_json::to_value(&body).unwrap()
        };

        let dev = serialize(Environment::Development);
        assert!(dev.get("stackTrace").is_some());

        let prod = serialize(Environment::Production);
        assert!(prod.get("stackTrace").is_none());
        assert_eq!(prod["statusCode"], 400);
    }
}
