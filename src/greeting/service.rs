//! Pipeline orchestrator for one greeting submission.
//!
//! Linear sequence per request, no retries, no compensation:
//!
//! ```text
//! load secrets → fetch fees → resolve nonce + encode → sign → broadcast
//! ```
//!
//! Each step's failure is terminal and becomes a [`SubmitError`] tagged
//! with the originating step, with the underlying cause chained. The HTTP
//! boundary collapses all of these into one client-facing error kind; only
//! the logs keep the distinction.

use alloy::primitives::{Address, TxHash};
use thiserror::Error;

use crate::blockchain::{ChainError, RpcClient, TxBuilder, Wallet};
use crate::config::schema::{Secrets, CHAIN_ID};
use crate::config::ConfigError;
use crate::fees::{FeeOracle, FeeOracleError};

/// Failure of one submission, tagged by the step that produced it.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to load submission secrets")]
    Config(#[from] ConfigError),

    #[error("fee oracle query failed")]
    FeeOracle(#[from] FeeOracleError),

    #[error("transaction build failed")]
    Build(#[from] ChainError),

    #[error("transaction broadcast failed")]
    Broadcast(#[source] ChainError),
}

impl SubmitError {
    /// Diagnostic taxonomy name recorded in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Config(_) => "ConfigError",
            SubmitError::FeeOracle(_) => "FeeOracleError",
            SubmitError::Build(
                ChainError::Rpc { .. }
                | ChainError::RpcTimeout { .. }
                | ChainError::InvalidEndpoint(_),
            ) => "RpcError",
            SubmitError::Build(ChainError::Wallet(_) | ChainError::Encoding(_)) => "EncodingError",
            SubmitError::Build(ChainError::Broadcast(_)) | SubmitError::Broadcast(_) => {
                "BroadcastError"
            }
        }
    }
}

/// Stateless orchestrator; each call drives an independent pipeline.
#[derive(Clone)]
pub struct GreetingService {
    http: reqwest::Client,
}

impl Default for GreetingService {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingService {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Submit one greeting to the contract, returning the broadcast
    /// transaction hash.
    ///
    /// Secrets are reloaded at the start of every call; nothing from a
    /// previous submission is reused.
    pub async fn create_greeting(&self, greeting: &str) -> Result<TxHash, SubmitError> {
        let secrets = Secrets::from_env()?;
        tracing::debug!(network = %secrets.network_name, "secrets loaded");

        let oracle = FeeOracle::new(self.http.clone(), secrets.gas_station_url.clone());
        let fees = oracle.fetch_fees().await?;

        let wallet = Wallet::from_private_key(&secrets.private_key, CHAIN_ID)?;
        let client = RpcClient::new(&secrets.rpc_url)?;
        let to: Address = secrets
            .contract_address
            .parse()
            .map_err(|e| ChainError::Encoding(format!("invalid contract address: {}", e)))?;

        let builder = TxBuilder::new(client, wallet);
        let tx = builder.build(to, &fees, greeting).await?;

        let hash = builder.submit(tx).await.map_err(SubmitError::Broadcast)?;
        Ok(hash)
    }
}
