//! Wallet management and transaction signing.
//!
//! # Security
//! - Keys arrive through the per-request secrets bundle only
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{ChainError, ChainResult};

/// Single-key wallet used to sign one submission.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
    network_wallet: EthereumWallet,
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID for EIP-155 replay protection
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> ChainResult<Self> {
        let key_hex = private_key_hex
            .strip_prefix("0x")
            .unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Wallet(format!("invalid private key format: {}", e)))?;

        let network_wallet = EthereumWallet::from(signer.clone());

        Ok(Self {
            signer,
            network_wallet,
            chain_id,
        })
    }

    /// The sender address derived from the signing key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The network-level wallet used to sign assembled transactions.
    pub fn network_wallet(&self) -> &EthereumWallet {
        &self.network_wallet
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.signer.address())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}
