use std::net::SocketAddr;

use serde::Deserialize;

use crate::health::HealthConfig;

/// Address used when neither the config file nor the CLI sets one
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), 8080);

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
}

impl ServerConfig {
    /// Configured listen address, falling back to [`DEFAULT_LISTEN_ADDRESS`]
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address.unwrap_or(DEFAULT_LISTEN_ADDRESS)
    }
}
