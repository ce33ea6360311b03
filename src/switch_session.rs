//! Per-PacketIn frame handling (spec §4.6): recognize ARP requests and
//! build the reply, with no address table of any kind — every host's MAC
//! and IPv4 address are a fixed function of its host id (§6), so a reply
//! needs nothing more than the request itself to synthesize.

use tracing::debug;

use crate::encoding::int_to_mac_bytes;
use crate::frame::{ArpFrame, ArpOperation, EtherType, EthernetFrame, Ipv4Address};

fn ipv4_to_host_id(ip: Ipv4Address, ip_base: u32) -> u64 {
    let ip_int = u32::from_be_bytes(ip);
    ip_int.wrapping_sub(ip_base) as u64
}

/// Processes one PacketIn payload. Returns the raw bytes of an Ethernet
/// frame to emit back out `OFPP_IN_PORT`, or `None` if the packet needs
/// no reply (anything but an ARP request, including a frame too short to
/// parse, which is dropped silently per spec §7).
pub fn handle_packet_in(bytes: &[u8], ip_base: u32) -> Option<Vec<u8>> {
    let eth = match EthernetFrame::from_bytes(bytes) {
        Ok(eth) => eth,
        Err(err) => {
            debug!(%err, "dropping unparsable frame");
            return None;
        }
    };

    if eth.ether_type != EtherType::Arp {
        return None;
    }

    let arp = match ArpFrame::from_bytes(&eth.payload) {
        Ok(arp) => arp,
        Err(err) => {
            debug!(%err, "dropping unparsable ARP payload");
            return None;
        }
    };

    if arp.opcode != ArpOperation::Request {
        return None;
    }

    let hwsrc = int_to_mac_bytes(ipv4_to_host_id(arp.target_ip, ip_base));
    let reply_arp = ArpFrame::new(ArpOperation::Reply, hwsrc, arp.target_ip, arp.sender_mac, arp.sender_ip);
    let reply_eth = EthernetFrame::new(eth.source, hwsrc, EtherType::Arp, reply_arp.to_bytes());

    debug!(?hwsrc, target_ip = ?arp.target_ip, "replying to ARP request");
    Some(reply_eth.to_bytes())
}
