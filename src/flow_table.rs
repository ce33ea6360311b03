//! In-memory mirror of per-switch forwarding state this controller has
//! installed (spec §4.2). Authoritative only insofar as it is updated after
//! every successful flow-mod send — never before.

use std::collections::HashMap;

use crate::frame::MacAddress;

/// `(dpid, mac_src, mac_dst) -> out_port`, plus enough structure to answer
/// "all entries on switch S" and "all entries on switch S egressing port P"
/// without a linear scan.
#[derive(Debug, Default)]
pub struct FlowTable {
    entries: HashMap<u64, HashMap<(MacAddress, MacAddress), u16>>,
}

impl FlowTable {
    pub fn new() -> Self {
        FlowTable { entries: HashMap::new() }
    }

    /// Idempotent insert. Installing the same `(dpid, src, dst)` again with
    /// a different `out_port` replaces the prior entry.
    pub fn add(&mut self, dpid: u64, src: MacAddress, dst: MacAddress, out_port: u16) {
        debug_assert!(out_port >= 1, "out_port must be >= 1");
        self.entries.entry(dpid).or_default().insert((src, dst), out_port);
    }

    /// Deletes entries matching the supplied fields; `None` fields act as
    /// wildcards. The common patterns are (dpid only), (dpid, out_port),
    /// (dpid, src, dst), and (no dpid at all, meaning every switch).
    pub fn remove(
        &mut self,
        dpid: Option<u64>,
        src: Option<MacAddress>,
        dst: Option<MacAddress>,
        out_port: Option<u16>,
    ) {
        let dpids: Vec<u64> = match dpid {
            Some(d) => vec![d],
            None => self.entries.keys().copied().collect(),
        };

        for d in dpids {
            if let Some(table) = self.entries.get_mut(&d) {
                table.retain(|(s, t), port| {
                    let src_match = src.map_or(true, |want| want == *s);
                    let dst_match = dst.map_or(true, |want| want == *t);
                    let port_match = out_port.map_or(true, |want| want == *port);
                    !(src_match && dst_match && port_match)
                });
            }
        }
    }

    /// All `(src, dst)` pairs currently installed on `dpid`.
    pub fn entries_on(&self, dpid: u64) -> Vec<(MacAddress, MacAddress)> {
        self.entries
            .get(&dpid)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default()
    }

    /// `(src, dst)` pairs on `dpid` whose installed entry egresses `out_port`.
    pub fn entries_via(&self, dpid: u64, out_port: u16) -> Vec<(MacAddress, MacAddress)> {
        self.entries
            .get(&dpid)
            .map(|table| {
                table
                    .iter()
                    .filter(|(_, port)| **port == out_port)
                    .map(|(pair, _)| *pair)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The installed out_port for `(dpid, src, dst)`, if any.
    pub fn get(&self, dpid: u64, src: MacAddress, dst: MacAddress) -> Option<u16> {
        self.entries.get(&dpid).and_then(|t| t.get(&(src, dst)).copied())
    }
}
