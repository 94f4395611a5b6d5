//! Fee oracle integration.
//!
//! Queries an external gas-station endpoint for current fee
//! recommendations and extracts the "fast" tier. Quotes are fetched fresh
//! per submission and never cached.

pub mod client;

pub use client::{FeeOracle, FeeOracleError, FeeQuote};
