use std::net::Ipv4Addr;
use std::time::Duration;

use clap::Parser;
use pnet::util::MacAddr;
use pulse_common::config::{
    Config, DEFAULT_INTERFACE, DEFAULT_TARGET_IP, DEFAULT_TARGET_MAC, DEFAULT_TARGET_PORT,
};

#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(version)]
#[command(about = "Sends a UDP datagram and an ARP request to a target once per interval.")]
pub struct CommandLine {
    /// IPv4 address both tools are pointed at
    #[arg(long = "target", default_value_t = DEFAULT_TARGET_IP)]
    pub target_ip: Ipv4Addr,

    /// Destination port of the UDP datagram
    #[arg(short, long, default_value_t = DEFAULT_TARGET_PORT)]
    pub port: u16,

    /// Hardware address of the target (recorded, not sent)
    #[arg(long, default_value_t = DEFAULT_TARGET_MAC, value_parser = parse_mac)]
    pub mac: MacAddr,

    /// Interface the ARP request is sent on
    #[arg(short, long, default_value = DEFAULT_INTERFACE)]
    pub interface: String,

    /// Seconds to pause after each iteration
    #[arg(long, default_value = "1", value_parser = parse_interval)]
    pub interval: Duration,

    /// Stop after this many iterations instead of running until interrupted
    #[arg(short = 'n', long)]
    pub iterations: Option<u64>,

    /// Reduce output. Repeat to also silence the tools themselves
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            target_ip: self.target_ip,
            target_port: self.port,
            target_mac: self.mac,
            interface: self.interface.clone(),
            interval: self.interval,
            iterations: self.iterations,
            quiet: self.quiet,
        }
    }
}

fn parse_mac(s: &str) -> Result<MacAddr, String> {
    s.parse::<MacAddr>().map_err(|_| format!("invalid MAC address: {s}"))
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("invalid interval: {s}"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("interval must be a positive number of seconds, got {s}"));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid interval {s}: {e}"))
}
