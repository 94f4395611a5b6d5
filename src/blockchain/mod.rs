//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Secrets (private key, RPC URL)
//!     → wallet.rs (key parsing, sender derivation, signing)
//!     → client.rs (JSON-RPC connection with timeouts)
//!     → transaction.rs (encode call, assemble, sign, broadcast)
//! ```
//!
//! # Security Constraints
//! - Private keys enter only through the per-request secrets bundle
//! - Never log private keys or raw signatures
//! - All RPC calls carry a client-side timeout

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::RpcClient;
pub use transaction::TxBuilder;
pub use types::{ChainError, ChainResult};
pub use wallet::Wallet;
