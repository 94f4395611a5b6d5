//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint configured for this submission
//! - Query the sender's transaction count at `latest`
//! - Broadcast raw signed transactions
//! - Provide a health check for blockchain connectivity

use alloy::eips::BlockId;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{ChainError, ChainResult};
use crate::config::schema::RPC_TIMEOUT_SECS;

/// JSON-RPC client wrapper for one submission's endpoint.
#[derive(Clone)]
pub struct RpcClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: String,
    timeout_duration: Duration,
}

impl RpcClient {
    /// Connect an HTTP provider to the given endpoint.
    pub fn new(rpc_url: &str) -> ChainResult<Self> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|_| ChainError::InvalidEndpoint(rpc_url.to_string()))?;
        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self {
            provider: Arc::new(provider),
            rpc_url: rpc_url.to_string(),
            timeout_duration: Duration::from_secs(RPC_TIMEOUT_SECS),
        })
    }

    /// Transaction count of `address` at the latest confirmed block.
    ///
    /// Deliberately pinned to `latest` rather than `pending`: the pipeline
    /// does not queue concurrent submissions from the same sender, and a
    /// pending-state nonce could double-count an in-flight transaction.
    pub async fn nonce_at_latest(&self, address: Address) -> ChainResult<u64> {
        const CALL: &str = "eth_getTransactionCount";
        let fut = self
            .provider
            .get_transaction_count(address)
            .block_id(BlockId::latest());
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(nonce)) => Ok(nonce),
            Ok(Err(e)) => Err(ChainError::Rpc {
                call: CALL,
                source: e,
            }),
            Err(_) => Err(ChainError::RpcTimeout {
                call: CALL,
                secs: RPC_TIMEOUT_SECS,
            }),
        }
    }

    /// Submit a raw signed transaction, returning the accepted hash.
    pub async fn broadcast_raw(&self, raw: &[u8]) -> ChainResult<TxHash> {
        const CALL: &str = "eth_sendRawTransaction";
        let fut = self.provider.send_raw_transaction(raw);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(ChainError::Rpc {
                call: CALL,
                source: e,
            }),
            Err(_) => Err(ChainError::RpcTimeout {
                call: CALL,
                secs: RPC_TIMEOUT_SECS,
            }),
        }
    }

    /// Check whether the endpoint answers a block-number query.
    pub async fn is_healthy(&self) -> bool {
        matches!(
            timeout(self.timeout_duration, self.provider.get_block_number()).await,
            Ok(Ok(_))
        )
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("rpc_url", &self.rpc_url)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}
