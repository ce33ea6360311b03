//! The event-driven coordinator (spec §4.5): tracks switch connections,
//! owns [`FlowTable`] and [`LinkState`] outright, drives [`Router`], and
//! issues the OpenFlow flow-mods that realize a computed route.
//!
//! Per the redesign note in spec §9, this is a single-consumer event
//! loop rather than two mutex-guarded critical sections: `run` pulls
//! [`ControllerEvent`] values off an `mpsc::Receiver` one at a time, so
//! `FlowTable`/`LinkState`/the connection map never need locking — only
//! the loop thread ever touches them.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc::Receiver;

use tracing::{debug, info, warn};

use crate::addressing;
use crate::config::Config;
use crate::encoding::{int_to_mac_bytes, mac_bytes_to_int};
use crate::error::ControllerError;
use crate::flow_table::FlowTable;
use crate::frame::MacAddress;
use crate::link_state::LinkState;
use crate::openflow::{
    ControllerEvent, OfpActionOutput, OfpFlowMod, OfpPacketOut, SwitchConnection, OFPP_IN_PORT,
};
use crate::router::Router;
use crate::switch_session;

pub struct ControlPlane {
    config: Config,
    router: Router,
    flow_table: FlowTable,
    link_state: LinkState,
    connections: HashMap<u64, Box<dyn SwitchConnection>>,
    num_hosts: u64,
    num_switches: u64,
    connected: u64,
    routes_built: bool,
}

impl ControlPlane {
    pub fn new(config: Config) -> Self {
        let router = Router::new(config.k, config.n);
        let (num_hosts, num_switches) = addressing::counts(config.k, config.n);
        info!(k = config.k, n = config.n, num_hosts, num_switches, "control plane initialized");

        ControlPlane {
            config,
            router,
            flow_table: FlowTable::new(),
            link_state: LinkState::new(),
            connections: HashMap::new(),
            num_hosts,
            num_switches,
            connected: 0,
            routes_built: false,
        }
    }

    /// Drains `events` until the sending side of the channel is closed.
    pub fn run(&mut self, events: Receiver<ControllerEvent>) {
        for event in events {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::ConnectionUp { dpid, connection } => {
                self.handle_connection_up(dpid, connection)
            }
            ControllerEvent::PacketIn { dpid, frame, in_port } => {
                self.handle_packet_in(dpid, &frame, in_port)
            }
            ControllerEvent::LinkEvent { dpid1, port1, dpid2, port2, added } => {
                self.handle_link_event(dpid1, port1, dpid2, port2, added)
            }
        }
    }

    fn handle_connection_up(&mut self, dpid: u64, connection: Box<dyn SwitchConnection>) {
        info!(dpid, "switch connected");
        self.connections.insert(dpid, connection);
        self.connected += 1;

        if !self.routes_built && self.connected == self.num_switches {
            self.routes_built = true;
            self.build_all_routes();
        }
    }

    /// Installs bidirectional flows for every host pair, once every
    /// switch has registered (spec §4.5).
    pub fn build_all_routes(&mut self) {
        info!(num_hosts = self.num_hosts, "building all routes");
        let mut invocations = 0u64;
        for i in 1..=self.num_hosts {
            for j in (i + 1)..=self.num_hosts {
                self.install_route(int_to_mac_bytes(i), int_to_mac_bytes(j));
                invocations += 1;
            }
        }
        info!(invocations, "build_all_routes complete");
    }

    fn handle_link_event(&mut self, dpid1: u64, port1: u16, dpid2: u64, port2: u16, added: bool) {
        let (lo, hi) = if dpid1 < dpid2 { (dpid1, dpid2) } else { (dpid2, dpid1) };
        info!(lo, hi, added, "link event");

        if added {
            if self.link_state.mark_up(lo, hi) {
                let mut pairs = self.flow_table.entries_on(dpid1);
                pairs.extend(self.flow_table.entries_on(dpid2));
                self.rebuild_pairs(pairs);
            }
        } else if self.link_state.mark_down(lo, hi) {
            let mut pairs = self.flow_table.entries_via(dpid1, port1);
            pairs.extend(self.flow_table.entries_via(dpid2, port2));
            self.rebuild_pairs(pairs);
        }
    }

    fn rebuild_pairs(&mut self, pairs: Vec<(MacAddress, MacAddress)>) {
        let mut seen = HashSet::new();
        for (a, b) in pairs {
            let key = if mac_bytes_to_int(&a) < mac_bytes_to_int(&b) { (a, b) } else { (b, a) };
            if seen.insert(key) {
                self.install_route(key.0, key.1);
            }
        }
    }

    fn handle_packet_in(&mut self, dpid: u64, frame: &[u8], in_port: u16) {
        debug!(dpid, in_port, "packet in");
        let Some(reply) = switch_session::handle_packet_in(frame, self.config.ip_base) else {
            return;
        };

        let msg = OfpPacketOut {
            data: reply,
            actions: vec![OfpActionOutput { port: OFPP_IN_PORT }],
            in_port,
        };

        if let Some(conn) = self.connections.get_mut(&dpid) {
            if let Err(source) = conn.send_packet_out(msg) {
                warn!(dpid, %source, "failed to send ARP reply");
            }
        } else {
            warn!(dpid, "ARP reply undeliverable, no connection registered");
        }
    }

    /// Recomputes and reinstalls the route for one pair: wipes whatever
    /// this pair previously held on any switch (a rebuild's new path may
    /// no longer touch every switch the old one did), then installs the
    /// freshly computed route.
    fn install_route(&mut self, mac_src: MacAddress, mac_dst: MacAddress) {
        self.wipe_pair(mac_src, mac_dst);

        let steps = self.router.route(&self.link_state, mac_src, mac_dst);
        for step in steps {
            if let Err(err) = self.send_flow_mod(step.dpid, OfpFlowMod::delete(step.src, step.dst)) {
                debug!(%err, "delete-before-add no-op");
            }

            match self.send_flow_mod(step.dpid, OfpFlowMod::add(step.src, step.dst, step.out_port)) {
                Ok(()) => self.flow_table.add(step.dpid, step.src, step.dst, step.out_port),
                Err(err) => warn!(%err, "flow-mod send failed, mirror not updated"),
            }
        }
    }

    fn wipe_pair(&mut self, mac_a: MacAddress, mac_b: MacAddress) {
        let dpids: Vec<u64> = self.connections.keys().copied().collect();
        for dpid in dpids {
            if self.flow_table.get(dpid, mac_a, mac_b).is_some() {
                let _ = self.send_flow_mod(dpid, OfpFlowMod::delete(mac_a, mac_b));
                self.flow_table.remove(Some(dpid), Some(mac_a), Some(mac_b), None);
            }
            if self.flow_table.get(dpid, mac_b, mac_a).is_some() {
                let _ = self.send_flow_mod(dpid, OfpFlowMod::delete(mac_b, mac_a));
                self.flow_table.remove(Some(dpid), Some(mac_b), Some(mac_a), None);
            }
        }
    }

    fn send_flow_mod(&mut self, dpid: u64, msg: OfpFlowMod) -> Result<(), ControllerError> {
        let conn = self.connections.get_mut(&dpid).ok_or(ControllerError::UnknownSwitch(dpid))?;
        conn.send_flow_mod(msg).map_err(|source| ControllerError::FlowModSend { dpid, source })
    }

    #[cfg(test)]
    pub(crate) fn flow_table(&self) -> &FlowTable {
        &self.flow_table
    }

    #[cfg(test)]
    pub(crate) fn link_state(&self) -> &LinkState {
        &self.link_state
    }

    #[cfg(test)]
    pub(crate) fn num_switches(&self) -> u64 {
        self.num_switches
    }
}
