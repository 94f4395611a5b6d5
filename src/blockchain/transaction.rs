//! Transaction assembly, signing, and broadcast.
//!
//! # Responsibilities
//! - Encode the fixed `setGreeting(string)` contract call
//! - Assemble an EIP-1559 transaction with the quoted fees
//! - Sign with the submission's wallet and broadcast raw

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::blockchain::client::RpcClient;
use crate::blockchain::types::{ChainError, ChainResult};
use crate::blockchain::wallet::Wallet;
use crate::config::schema::GAS_LIMIT;
use crate::fees::FeeQuote;

// The one contract function this service invokes. The interface is fixed;
// the deployed address comes from the secrets bundle.
sol! {
    function setGreeting(string _greeting);
}

/// Transaction builder for the greeting submission.
pub struct TxBuilder {
    client: RpcClient,
    wallet: Wallet,
}

impl TxBuilder {
    pub fn new(client: RpcClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// The sender address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Assemble the EIP-1559 transaction request.
    ///
    /// The nonce is resolved from the chain's latest confirmed state on
    /// every call; nothing is cached between submissions.
    pub async fn build(
        &self,
        to: Address,
        fees: &FeeQuote,
        greeting: &str,
    ) -> ChainResult<TransactionRequest> {
        let from = self.wallet.address();
        let nonce = self.client.nonce_at_latest(from).await?;
        let data = encode_set_greeting(greeting);

        let tx = TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_nonce(nonce)
            .with_input(data)
            .with_chain_id(self.wallet.chain_id())
            .with_gas_limit(GAS_LIMIT)
            .with_max_priority_fee_per_gas(gwei_to_wei(fees.fast_max_priority_fee))
            .with_max_fee_per_gas(gwei_to_wei(fees.fast_max_fee));

        tracing::debug!(
            from = %from,
            to = %to,
            nonce = nonce,
            "transaction assembled"
        );
        Ok(tx)
    }

    /// Sign the assembled transaction and broadcast it raw.
    ///
    /// Any signing or broadcast failure is wrapped into a single broadcast
    /// error with the original failure kept as its source.
    pub async fn submit(&self, tx: TransactionRequest) -> ChainResult<TxHash> {
        let envelope = tx
            .build(self.wallet.network_wallet())
            .await
            .map_err(|e| ChainError::Broadcast(Box::new(e)))?;
        let raw = envelope.encoded_2718();

        let hash = match self.client.broadcast_raw(&raw).await {
            Ok(hash) => hash,
            Err(e) => return Err(ChainError::Broadcast(Box::new(e))),
        };

        tracing::info!(tx_hash = %hash, "transaction accepted by rpc");
        Ok(hash)
    }
}

/// ABI-encode the `setGreeting(string)` call.
pub fn encode_set_greeting(greeting: &str) -> Bytes {
    Bytes::from(
        setGreetingCall {
            _greeting: greeting.to_string(),
        }
        .abi_encode(),
    )
}

/// Convert a gwei amount with at most 4 fractional digits into wei.
///
/// Scaling by 10^4 first keeps the arithmetic exact for the precision the
/// fee oracle client guarantees.
pub fn gwei_to_wei(gwei: f64) -> u128 {
    (gwei * 10_000.0).round() as u128 * 100_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gwei_to_wei_exact_for_quote_precision() {
        assert_eq!(gwei_to_wei(12.3456), 12_345_600_000);
        assert_eq!(gwei_to_wei(45.6789), 45_678_900_000);
        assert_eq!(gwei_to_wei(1.0), 1_000_000_000);
        assert_eq!(gwei_to_wei(0.0), 0);
    }

    #[test]
    fn test_both_fee_fields_use_the_same_factor() {
        let quote = FeeQuote {
            fast_max_priority_fee: 12.3456,
            fast_max_fee: 45.6789,
        };
        let priority = gwei_to_wei(quote.fast_max_priority_fee);
        let max = gwei_to_wei(quote.fast_max_fee);
        assert_eq!(priority, 12_345_600_000);
        assert_eq!(max, 45_678_900_000);
        // Same conversion factor: ratios survive the conversion
        assert_eq!(priority * 456_789, max * 123_456);
    }

    #[test]
    fn test_encode_set_greeting_selector() {
        let data = encode_set_greeting("hello");
        // keccak256("setGreeting(string)")[..4]
        assert_eq!(&data[..4], &[0xa4, 0x13, 0x68, 0x62]);
        assert_eq!(&data[..4], setGreetingCall::SELECTOR.as_slice());
    }

    #[test]
    fn test_encode_set_greeting_round_trips() {
        let data = encode_set_greeting("gm polygon");
        let decoded = setGreetingCall::abi_decode(&data).unwrap();
        assert_eq!(decoded._greeting, "gm polygon");
    }
}
