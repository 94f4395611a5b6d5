//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! middleware (every completed request)
//!     → logging.rs (one completion line)
//! error path (classified failures)
//!     → logging.rs (summary + detail lines)
//! ```
//!
//! # Design Decisions
//! - One shared formatting/emission point; the middleware and the error
//!   path never format their own lines, so the two cannot drift apart
//! - Detail lines carry the request context verbatim; stripping sensitive
//!   fields is the caller's obligation, documented on the emitter

pub mod logging;

pub use logging::{init_logging, LogRecord};
