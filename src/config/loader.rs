//! Per-submission secret loading from the process environment.

use thiserror::Error;

use crate::config::schema::Secrets;

/// Environment variable holding the fee oracle URL.
pub const GAS_STATION: &str = "GAS_STATION";
/// Environment variable holding the JSON-RPC endpoint URL.
pub const RPC_URL: &str = "RPC_URL";
/// Environment variable holding the hex signing key.
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
/// Environment variable holding the network name.
pub const NETWORK_NAME: &str = "NETWORK_NAME";
/// Environment variable holding the target contract address.
pub const CONTRACT_ADDRESS: &str = "CONTRACT_ADDRESS";

/// Error type for secret loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {0} is empty")]
    Empty(&'static str),
}

impl Secrets {
    /// Load the secrets bundle from the environment.
    ///
    /// Pure lookup with no caching: every submission calls this again so a
    /// rotated key or URL takes effect on the next request.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            gas_station_url: require(GAS_STATION)?,
            rpc_url: require(RPC_URL)?,
            private_key: require(PRIVATE_KEY)?,
            network_name: require(NETWORK_NAME)?,
            contract_address: require(CONTRACT_ADDRESS)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    let value = std::env::var(name).map_err(|_| ConfigError::Missing(name))?;
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(value)
}
