//! Configuration schema definitions and network constants.

/// Listen address for the HTTP surface.
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Base path every route is nested under.
pub const BASE_PATH: &str = "/api/v1";

/// Chain ID of the supported network (Polygon PoS).
pub const CHAIN_ID: u64 = 137;

/// Fixed gas limit for the `setGreeting` call.
pub const GAS_LIMIT: u64 = 5_000_000;

/// Timeout applied to every outbound JSON-RPC call.
pub const RPC_TIMEOUT_SECS: u64 = 10;

/// Total request timeout enforced by the HTTP transport layer.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum accepted request body size in bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Deployment environment flag.
///
/// Controls whether error responses expose the underlying cause chain
/// (development only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read the flag from `APP_ENV`.
    ///
    /// `dev`/`development` selects [`Environment::Development`]; anything
    /// else, including an unset variable, is treated as production.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("dev") | Ok("development") => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

/// Secrets bundle for a single submission.
///
/// Loaded fresh at the start of every submission via
/// [`Secrets::from_env`](crate::config::loader) and owned by that
/// submission; never cached across requests.
#[derive(Clone)]
pub struct Secrets {
    /// Fee oracle (gas station) endpoint URL.
    pub gas_station_url: String,
    /// Ledger JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Hex-encoded signing key, with or without `0x` prefix.
    pub private_key: String,
    /// Human-readable network name (diagnostic only).
    pub network_name: String,
    /// Target contract address in hex.
    pub contract_address: String,
}

// Keys must never leak through Debug output.
impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("gas_station_url", &self.gas_station_url)
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("network_name", &self.network_name)
            .field("contract_address", &self.contract_address)
            .finish()
    }
}
