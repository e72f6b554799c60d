use core::net::Ipv4Addr;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SSID is empty")]
    EmptySsid,
    #[error("SSID is {0} bytes long (max {max})", max = crate::MAX_SSID_LEN)]
    SsidTooLong(usize),
    #[error("password is empty")]
    EmptyPassword,
    #[error(
        "password is {0} bytes long (expected {min} to {max})",
        min = crate::MIN_PASSWORD_LEN,
        max = crate::MAX_PASSWORD_LEN
    )]
    PasswordLength(usize),
    #[error("a {max}-character password must be a hex PSK", max = crate::MAX_PASSWORD_LEN)]
    InvalidPsk,
    #[error("passphrase contains non-printable or non-ASCII characters")]
    InvalidPassphrase,
    #[error("netmask {0} has non-contiguous bits")]
    InvalidNetmask(Ipv4Addr),
    #[error("{0} is not a usable host address")]
    InvalidHostAddress(Ipv4Addr),
    #[error("static IP {static_ip} is outside of network {network}/{prefix_len}")]
    StaticIpOutsideSubnet {
        static_ip: Ipv4Addr,
        network: Ipv4Addr,
        prefix_len: u8,
    },
    #[error("static IP {0} is the router address")]
    StaticIpIsRouter(Ipv4Addr),
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", defmt::Display2Format(self))
    }
}
