//! # External Tools
//!
//! The two programs the driver sequences and the exact argument lists they
//! receive on every iteration.

use std::fmt;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Crafts and sends a single raw UDP datagram.
    UdpSender,
    /// Sends a single ARP request on an interface.
    ArpRequester,
}

impl Tool {
    /// Both tools, in the order they are checked and invoked.
    pub const ALL: [Tool; 2] = [Tool::UdpSender, Tool::ArpRequester];

    pub fn program(&self) -> &'static str {
        match self {
            Tool::UdpSender => "hping3",
            Tool::ArpRequester => "arping",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// One planned call of an external tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub tool: Tool,
    pub args: Vec<String>,
}

impl Invocation {
    /// `hping3 --udp -p <port> -c 1 <ip>`
    pub fn udp_send(cfg: &Config) -> Self {
        Self {
            tool: Tool::UdpSender,
            args: vec![
                "--udp".to_string(),
                "-p".to_string(),
                cfg.target_port.to_string(),
                "-c".to_string(),
                "1".to_string(),
                cfg.target_ip.to_string(),
            ],
        }
    }

    /// `arping -c 1 -I <iface> <ip>`
    pub fn arp_request(cfg: &Config) -> Self {
        Self {
            tool: Tool::ArpRequester,
            args: vec![
                "-c".to_string(),
                "1".to_string(),
                "-I".to_string(),
                cfg.interface.clone(),
                cfg.target_ip.to_string(),
            ],
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tool.program())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The calls making up one loop iteration, UDP first.
pub fn iteration_plan(cfg: &Config) -> [Invocation; 2] {
    [Invocation::udp_send(cfg), Invocation::arp_request(cfg)]
}
