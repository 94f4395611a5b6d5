//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (.env loaded at bootstrap)
//!     → loader.rs (named lookups, one per secret)
//!     → Secrets (validated, immutable)
//!     → threaded through one submission, then dropped
//! ```
//!
//! # Design Decisions
//! - Secrets are reloaded from the environment at the start of every
//!   submission; the oracle URL or signing key may rotate between requests
//! - `Secrets` is an immutable value returned by a pure loader, never
//!   mutable per-field state
//! - Network constants (chain id, gas limit, listen address) are fixed at
//!   compile time for the supported network

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::{Environment, Secrets};
