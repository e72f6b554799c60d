//! Wi-Fi credentials and static IPv4 addressing of the LED PWM server.
//!
//! The firmware builds a single [`NetworkConfig`] at startup and passes it by reference
//! to whatever brings the network interface up.

#![cfg_attr(not(test), no_std)]

mod config;
#[cfg(feature = "embassy-net")]
mod embassy;
mod error;
pub mod subnet;

pub use config::{EnvVariables, NetworkConfig, ENVIRONMENT_VARIABLES};
pub use error::ConfigError;

/// Longest SSID allowed by 802.11, in bytes.
pub const MAX_SSID_LEN: usize = 32;
/// Shortest WPA passphrase.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Length of a raw hex PSK, also the longest accepted password.
pub const MAX_PASSWORD_LEN: usize = 64;
