//! Greeting submission pipeline.
//!
//! The one business operation this service exposes: take a greeting
//! string, and invoke `setGreeting(string)` on the configured contract
//! through a signed, fee-quoted transaction.

pub mod service;

pub use service::{GreetingService, SubmitError};
