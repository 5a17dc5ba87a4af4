//! # Run Configuration
//!
//! Fixed parameters of a run. Every value is read-only once the driver starts.

use std::net::Ipv4Addr;
use std::time::Duration;

use pnet::util::MacAddr;

pub const DEFAULT_TARGET_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);
pub const DEFAULT_TARGET_PORT: u16 = 12345;
pub const DEFAULT_TARGET_MAC: MacAddr = MacAddr(0x00, 0x11, 0x22, 0x33, 0x44, 0x55);
pub const DEFAULT_INTERFACE: &str = "eth0";
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Address both tools are pointed at.
    pub target_ip: Ipv4Addr,
    /// Destination port of the UDP datagram.
    pub target_port: u16,
    /// Hardware address of the target.
    ///
    /// Neither tool is given this value. It is kept so the whole target
    /// description lives in one place.
    pub target_mac: MacAddr,
    /// Interface the ARP request goes out on.
    pub interface: String,
    /// Pause after each iteration.
    pub interval: Duration,
    /// Stop after this many iterations. `None` runs until interrupted.
    pub iterations: Option<u64>,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_ip: DEFAULT_TARGET_IP,
            target_port: DEFAULT_TARGET_PORT,
            target_mac: DEFAULT_TARGET_MAC,
            interface: DEFAULT_INTERFACE.to_string(),
            interval: DEFAULT_INTERVAL,
            iterations: None,
            quiet: 0,
        }
    }
}

impl Config {
    /// True once `completed` iterations satisfy the configured bound.
    pub fn is_exhausted(&self, completed: u64) -> bool {
        self.iterations.is_some_and(|limit| completed >= limit)
    }
}
