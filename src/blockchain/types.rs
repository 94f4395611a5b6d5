//! Chain-specific error definitions.

use alloy::transports::TransportError;
use thiserror::Error;

/// Errors that can occur during blockchain operations.
///
/// Each variant is decided at the point the failure occurs; underlying
/// errors are kept as sources so diagnostics retain the full chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The configured RPC endpoint is not a valid URL.
    #[error("invalid rpc url '{0}'")]
    InvalidEndpoint(String),

    /// A JSON-RPC call failed.
    #[error("rpc error during {call}")]
    Rpc {
        call: &'static str,
        #[source]
        source: TransportError,
    },

    /// A JSON-RPC call exceeded the client-side timeout.
    #[error("rpc timeout after {secs}s during {call}")]
    RpcTimeout { call: &'static str, secs: u64 },

    /// Private key could not be parsed.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Contract call payload or address could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Signing or broadcast failed. The original failure is preserved as
    /// the source rather than discarded.
    #[error("broadcast failed")]
    Broadcast(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Result type for blockchain operations.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChainError::RpcTimeout {
            call: "eth_getTransactionCount",
            secs: 10,
        };
        assert_eq!(
            err.to_string(),
            "rpc timeout after 10s during eth_getTransactionCount"
        );

        let err = ChainError::InvalidEndpoint("not a url".to_string());
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_broadcast_preserves_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ChainError::Broadcast(Box::new(inner));
        let source = std::error::Error::source(&err).expect("source kept");
        assert!(source.to_string().contains("refused"));
    }
}
