//! MAC and IP encoding helpers with the project's fixed scheme (spec §6).
//!
//! A host's MAC address IS its host id, zero-padded to 12 hex digits and
//! colon-separated; its IPv4 address is `ip_base + host_id`.

use crate::frame::MacAddress;

/// Formats a host id as `"00:00:00:00:00:0h"`.
pub fn mac_to_str(host_id: u64) -> String {
    let hex = format!("{:012x}", host_id);
    hex.as_bytes()
        .chunks(2)
        .map(|c| std::str::from_utf8(c).unwrap())
        .collect::<Vec<_>>()
        .join(":")
}

/// Parses a colon-separated MAC string back into its host id.
pub fn mac_to_int(mac: &str) -> u64 {
    let hex: String = mac.chars().filter(|c| *c != ':').collect();
    u64::from_str_radix(&hex, 16).unwrap_or(0)
}

/// Converts a [`MacAddress`] (6 raw bytes) to its encoded host id.
pub fn mac_bytes_to_int(mac: &MacAddress) -> u64 {
    mac.iter().fold(0u64, |acc, b| (acc << 8) | *b as u64)
}

/// Converts a host id to its 6-byte [`MacAddress`] representation.
pub fn int_to_mac_bytes(host_id: u64) -> MacAddress {
    let b = host_id.to_be_bytes();
    [b[2], b[3], b[4], b[5], b[6], b[7]]
}

/// Formats a host's IPv4 address as dotted notation with `/ip_mask`.
pub fn ip_to_str(host_id: u64, ip_base: u32, ip_mask: u8) -> String {
    let ip = ip_base.wrapping_add(host_id as u32);
    format!(
        "{}.{}.{}.{}/{}",
        (ip >> 24) & 0xFF,
        (ip >> 16) & 0xFF,
        (ip >> 8) & 0xFF,
        ip & 0xFF,
        ip_mask
    )
}

/// Parses a dotted-decimal IPv4 string (ignoring any `/mask` suffix) and
/// returns the corresponding host MAC string.
pub fn ip_to_mac(ip: &str, ip_base: u32) -> String {
    let addr = ip.split('/').next().unwrap_or(ip);
    let mut ip_int: u32 = 0;
    for (i, octet) in addr.split('.').take(4).enumerate() {
        let val: u32 = octet.parse().unwrap_or(0);
        ip_int += val << (24 - 8 * i);
    }
    mac_to_str((ip_int.wrapping_sub(ip_base)) as u64)
}
