use core::fmt;
use core::net::Ipv4Addr;

use log::{info, warn};

use crate::{subnet, ConfigError, MAX_PASSWORD_LEN, MAX_SSID_LEN, MIN_PASSWORD_LEN};

/// Build-time overrides of the default network configuration.
pub struct EnvVariables {
    pub wifi_ssid: Option<&'static str>,
    pub wifi_password: Option<&'static str>,
    pub static_ip: Option<&'static str>,
    pub router_ip: Option<&'static str>,
    pub subnet_mask: Option<&'static str>,
}

pub const ENVIRONMENT_VARIABLES: EnvVariables = EnvVariables {
    // These are read when the firmware is compiled, not at runtime
    wifi_ssid: option_env!("WIFI_SSID"),
    wifi_password: option_env!("WIFI_PASSWORD"),
    static_ip: option_env!("WIFI_STATIC_IP"),
    router_ip: option_env!("WIFI_ROUTER_IP"),
    subnet_mask: option_env!("WIFI_SUBNET_MASK"),
};

/// Network identity and static addressing of the device.
///
/// Construction never fails: call [`NetworkConfig::validate`] before handing the values
/// to the network stack if they may have been overridden.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Name of the Wi-Fi network to join
    pub ssid: &'static str,
    /// Pre-shared key of the Wi-Fi network
    pub password: &'static str,
    /// Address the device claims on the LAN
    pub static_ip: Ipv4Addr,
    /// Router address, used both as gateway and DNS resolver
    pub router_ip: Ipv4Addr,
    /// Netmask applied to the static IP
    pub subnet: Ipv4Addr,
}

impl NetworkConfig {
    pub const DEFAULT: Self = Self {
        ssid: "ExampleSSID",
        password: "3Xample!pa55wd",
        static_ip: Ipv4Addr::new(192, 168, 1, 10),
        router_ip: Ipv4Addr::new(192, 168, 1, 1),
        subnet: Ipv4Addr::new(255, 255, 255, 0),
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Default configuration with the build-time overrides from [`ENVIRONMENT_VARIABLES`] applied.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.load_from_env();
        config
    }

    pub fn load_from_env(&mut self) -> &mut Self {
        self.load_from_vars(&ENVIRONMENT_VARIABLES)
    }

    /// Applies every override present in `vars`.
    ///
    /// Addresses that fail to parse are reported and leave the current value untouched.
    pub fn load_from_vars(&mut self, vars: &EnvVariables) -> &mut Self {
        info!("Loading network configuration from environment variables...");

        if let Some(ssid) = vars.wifi_ssid {
            self.ssid = ssid;
        }
        if let Some(password) = vars.wifi_password {
            self.password = password;
        }

        self.static_ip = parse_addr("WIFI_STATIC_IP", vars.static_ip, self.static_ip);
        self.router_ip = parse_addr("WIFI_ROUTER_IP", vars.router_ip, self.router_ip);
        self.subnet = parse_addr("WIFI_SUBNET_MASK", vars.subnet_mask, self.subnet);

        info!("Network configuration loaded: {}", self);
        self
    }

    /// CIDR prefix length of the subnet mask.
    pub fn prefix_len(&self) -> Result<u8, ConfigError> {
        subnet::prefix_len(self.subnet).ok_or(ConfigError::InvalidNetmask(self.subnet))
    }

    /// Network address of the LAN, as seen from the router.
    pub fn network(&self) -> Ipv4Addr {
        subnet::network(self.router_ip, self.subnet)
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        subnet::broadcast(self.router_ip, self.subnet)
    }

    /// Checks the credentials and the addressing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_credentials()?;
        self.validate_addressing()
    }

    pub(crate) fn validate_credentials(&self) -> Result<(), ConfigError> {
        match self.ssid.len() {
            0 => return Err(ConfigError::EmptySsid),
            len if len > MAX_SSID_LEN => return Err(ConfigError::SsidTooLong(len)),
            _ => {}
        }

        match self.password.len() {
            0 => Err(ConfigError::EmptyPassword),
            len if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) => {
                Err(ConfigError::PasswordLength(len))
            }
            MAX_PASSWORD_LEN => {
                if self.password.bytes().all(|b| b.is_ascii_hexdigit()) {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidPsk)
                }
            }
            _ => {
                if self.password.bytes().all(|b| matches!(b, b' '..=b'~')) {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidPassphrase)
                }
            }
        }
    }

    pub(crate) fn validate_addressing(&self) -> Result<(), ConfigError> {
        let prefix_len = self.prefix_len()?;

        for addr in [self.static_ip, self.router_ip] {
            if !is_unicast(addr) {
                return Err(ConfigError::InvalidHostAddress(addr));
            }
        }

        if !subnet::same_network(self.static_ip, self.router_ip, self.subnet) {
            return Err(ConfigError::StaticIpOutsideSubnet {
                static_ip: self.static_ip,
                network: self.network(),
                prefix_len,
            });
        }

        // /31 and /32 networks have no network or broadcast address
        if prefix_len < 31 {
            let (network, broadcast) = (self.network(), self.broadcast());
            for addr in [self.static_ip, self.router_ip] {
                if addr == network || addr == broadcast {
                    return Err(ConfigError::InvalidHostAddress(addr));
                }
            }
        }

        if self.static_ip == self.router_ip {
            return Err(ConfigError::StaticIpIsRouter(self.static_ip));
        }
        Ok(())
    }

    /// SSID in the fixed-capacity form taken by the Wi-Fi driver.
    pub fn ssid_string(&self) -> Result<heapless::String<MAX_SSID_LEN>, ConfigError> {
        heapless::String::try_from(self.ssid)
            .map_err(|_| ConfigError::SsidTooLong(self.ssid.len()))
    }

    /// Password in the fixed-capacity form taken by the Wi-Fi driver.
    pub fn password_string(&self) -> Result<heapless::String<MAX_PASSWORD_LEN>, ConfigError> {
        heapless::String::try_from(self.password)
            .map_err(|_| ConfigError::PasswordLength(self.password.len()))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::new()
    }
}

fn parse_addr(name: &str, value: Option<&str>, current: Ipv4Addr) -> Ipv4Addr {
    match value.map(str::parse::<Ipv4Addr>) {
        None => current,
        Some(Ok(addr)) => addr,
        Some(Err(_)) => {
            warn!("{name} is not a valid IPv4 address, keeping {current}");
            current
        }
    }
}

fn is_unicast(addr: Ipv4Addr) -> bool {
    !(addr.is_unspecified() || addr.is_broadcast() || addr.is_multicast() || addr.is_loopback())
}

// The password never shows up in logs.
impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ssid '{}', ip {}", self.ssid, self.static_ip)?;
        match subnet::prefix_len(self.subnet) {
            Some(prefix_len) => write!(f, "/{prefix_len}")?,
            None => write!(f, " mask {}", self.subnet)?,
        }
        write!(f, ", gateway {}", self.router_ip)
    }
}

impl fmt::Debug for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkConfig")
            .field("ssid", &self.ssid)
            .field("password", &format_args!("<redacted>"))
            .field("static_ip", &self.static_ip)
            .field("router_ip", &self.router_ip)
            .field("subnet", &self.subnet)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for NetworkConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", defmt::Display2Format(self))
    }
}
