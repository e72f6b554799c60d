//! Hand-off of the static addressing to `embassy-net`.

use embassy_net::{Ipv4Cidr, StaticConfigV4};

use crate::{ConfigError, NetworkConfig};

impl NetworkConfig {
    /// Static IPv4 configuration for the network stack.
    ///
    /// The router doubles as the only DNS server.
    pub fn to_static_config_v4(&self) -> Result<StaticConfigV4, ConfigError> {
        self.validate_addressing()?;

        let mut dns_servers = heapless::Vec::new();
        // cannot fail, the list holds up to 3 servers
        let _ = dns_servers.push(self.router_ip);

        Ok(StaticConfigV4 {
            address: Ipv4Cidr::new(self.static_ip, self.prefix_len()?),
            gateway: Some(self.router_ip),
            dns_servers,
        })
    }

    pub fn to_embassy_config(&self) -> Result<embassy_net::Config, ConfigError> {
        self.to_static_config_v4().map(embassy_net::Config::ipv4_static)
    }
}

#[cfg(test)]
mod test {
    use core::net::Ipv4Addr;

    use super::*;

    #[test]
    fn test_static_config_from_defaults() {
        let static_config = NetworkConfig::DEFAULT.to_static_config_v4().unwrap();

        assert_eq!(
            static_config.address,
            Ipv4Cidr::new(Ipv4Addr::new(192, 168, 1, 10), 24)
        );
        assert_eq!(static_config.gateway, Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(&static_config.dns_servers[..], &[Ipv4Addr::new(192, 168, 1, 1)]);
    }

    #[test]
    fn test_static_config_rejects_foreign_network() {
        let config = NetworkConfig {
            static_ip: Ipv4Addr::new(10, 0, 0, 10),
            ..NetworkConfig::DEFAULT
        };

        assert!(matches!(
            config.to_static_config_v4(),
            Err(ConfigError::StaticIpOutsideSubnet { .. })
        ));
    }
}
