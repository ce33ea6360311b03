//! Startup configuration, fixed for the lifetime of the controller.
//!
//! Mirrors the constants block at the top of the original `comm.py`:
//! `DCELL_K`, `DCELL_N`, `LINK_BW`, `LINK_TIMEOUT`, `IP_BASE`, `IP_MASK`.

use clap::Parser;

/// DCell geometry and link parameters fixed at controller startup.
#[derive(Debug, Clone, Parser)]
#[command(name = "dcell-controller", about = "DCell fault-tolerant routing controller")]
pub struct Config {
    /// DCell recursion level (k >= 0).
    #[arg(long, default_value_t = 1)]
    pub k: u32,

    /// Number of hosts in a DCell_0 (n >= 2).
    #[arg(long, default_value_t = 3)]
    pub n: u64,

    /// Link bandwidth in Mbps. Not used by routing itself; carried through
    /// for parity with the original topology parameters.
    #[arg(long = "link-bw", default_value_t = 100)]
    pub link_bw: u32,

    /// Link-discovery heartbeat timeout, in seconds.
    #[arg(long = "link-timeout", default_value_t = 1)]
    pub link_timeout: u64,

    /// Base value added to a host id to form its IPv4 address.
    #[arg(long = "ip-base", default_value_t = 10 << 24)]
    pub ip_base: u32,

    /// Netmask (prefix length) advertised on host IPv4 addresses.
    #[arg(long = "ip-mask", default_value_t = 8)]
    pub ip_mask: u8,
}

impl Config {
    /// Constructs a `Config` with `k`/`n` set explicitly and every other
    /// field at the spec-fixed default.
    pub fn new(k: u32, n: u64) -> Self {
        Config {
            k,
            n,
            link_bw: 100,
            link_timeout: 1,
            ip_base: 10 << 24,
            ip_mask: 8,
        }
    }
}
