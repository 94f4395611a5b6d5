//! HTTP surface.
//!
//! # Responsibilities
//! - Axum router exposing `POST /api/v1/contract` and `GET /api/v1/health`
//! - Per-request logging middleware at the finish boundary
//! - Uniform error body shaping and ordered error classification
//!
//! # Design Decisions
//! - Logging and error shaping depend on [`context::RequestContext`], a
//!   plain value object, never on framework request types
//! - Every pipeline failure surfaces as one client-facing error kind;
//!   fine-grained causes live only in logs

pub mod context;
pub mod error;
pub mod middleware;
pub mod server;

pub use context::RequestContext;
pub use error::ApiError;
pub use server::HttpServer;
