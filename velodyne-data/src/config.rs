#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Standard UDP port the sensor sends data packets on.
pub const DEFAULT_DATA_PORT: u16 = 2368;

/// Settings of the datagram receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverConfig {
    /// Local address the receiving socket binds to.
    pub bind_addr: SocketAddr,
    /// Only datagrams sent from this port are processed. `None` accepts all.
    pub source_port: Option<u16>,
    /// Upper bound on how long a pending receive delays shutdown.
    /// Values below one millisecond are raised to one millisecond.
    pub read_timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_DATA_PORT)),
            source_port: Some(DEFAULT_DATA_PORT),
            read_timeout: Duration::from_millis(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listens_on_data_port() {
        let config = DriverConfig::default();
        assert_eq!(config.bind_addr.port(), DEFAULT_DATA_PORT);
        assert_eq!(config.source_port, Some(DEFAULT_DATA_PORT));
        assert!(config.read_timeout > Duration::ZERO);
    }
}
