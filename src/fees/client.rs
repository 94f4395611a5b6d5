//! Gas-station HTTP client.
//!
//! # Responsibilities
//! - One outbound GET against the configured oracle URL per submission
//! - Extract `fast.maxPriorityFee` and `fast.maxFee` from the JSON body
//! - Fix both values to 4 fractional digits before use
//! - Propagate every failure to the caller; no internal retry

use serde::Deserialize;
use thiserror::Error;

/// "Fast" tier fee recommendation, in gwei.
///
/// Both fields carry at most 4 fractional digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeQuote {
    pub fast_max_priority_fee: f64,
    pub fast_max_fee: f64,
}

/// Upper bound accepted for a quoted fee, in gwei.
///
/// Caps the downstream wei conversion well inside u128 range; anything
/// above this is a broken oracle, not a price.
pub const MAX_FEE_GWEI: f64 = 10_000_000.0;

/// Errors from the fee oracle query.
#[derive(Debug, Error)]
pub enum FeeOracleError {
    /// Network failure or undecodable body.
    #[error("fee oracle request failed")]
    Transport(#[from] reqwest::Error),

    /// Oracle answered with a non-2xx status.
    #[error("fee oracle returned status {0}")]
    Status(u16),

    /// Expected field absent from the response body.
    #[error("fee oracle response missing field {0}")]
    MissingField(&'static str),

    /// Field present but not a finite number.
    #[error("fee oracle field {0} is not a finite number")]
    NonFinite(&'static str),

    /// Field is negative or implausibly large.
    #[error("fee oracle field {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Deserialize)]
struct GasStationResponse {
    fast: Option<FeeTier>,
}

#[derive(Debug, Deserialize)]
struct FeeTier {
    #[serde(rename = "maxPriorityFee")]
    max_priority_fee: Option<f64>,
    #[serde(rename = "maxFee")]
    max_fee: Option<f64>,
}

/// Client for the external gas-station endpoint.
#[derive(Debug, Clone)]
pub struct FeeOracle {
    http: reqwest::Client,
    url: String,
}

impl FeeOracle {
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }

    /// Fetch the current "fast" fee recommendation.
    pub async fn fetch_fees(&self) -> Result<FeeQuote, FeeOracleError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeeOracleError::Status(status.as_u16()));
        }

        let body: GasStationResponse = response.json().await?;
        let fast = body.fast.ok_or(FeeOracleError::MissingField("fast"))?;
        let priority = fast
            .max_priority_fee
            .ok_or(FeeOracleError::MissingField("fast.maxPriorityFee"))?;
        let max_fee = fast
            .max_fee
            .ok_or(FeeOracleError::MissingField("fast.maxFee"))?;

        let quote = FeeQuote {
            fast_max_priority_fee: round4(validated("fast.maxPriorityFee", priority)?),
            fast_max_fee: round4(validated("fast.maxFee", max_fee)?),
        };
        tracing::debug!(
            max_priority_fee_gwei = quote.fast_max_priority_fee,
            max_fee_gwei = quote.fast_max_fee,
            "fee quote fetched"
        );
        Ok(quote)
    }
}

/// Fix a fee value to 4 fractional digits, matching the precision the
/// downstream gwei conversion expects.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Reject values the wei conversion cannot represent safely.
fn validated(field: &'static str, value: f64) -> Result<f64, FeeOracleError> {
    if !value.is_finite() {
        return Err(FeeOracleError::NonFinite(field));
    }
    if value < 0.0 || value > MAX_FEE_GWEI {
        return Err(FeeOracleError::OutOfRange { field, value });
    }
    Ok(value)
}
