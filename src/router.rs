//! The recursive DFR routing algorithm: `dcell_route`, the middle-link
//! computation that locates the pre-wired inter-sub-cell links, and
//! proxy selection for detouring around a broken middle link.
//!
//! Pure given [`LinkState`]: nothing here touches I/O or the
//! [`FlowTable`](crate::flow_table::FlowTable) mirror. [`Router::route`]
//! returns the full bidirectional set of switch-to-switch installs for a
//! pair; [`crate::control_plane::ControlPlane`] is the one that wipes
//! stale entries, sends the flow-mods and updates the mirror only after
//! a send succeeds.

use tracing::{debug, warn};

use crate::addressing::{self, t_g};
use crate::encoding::mac_bytes_to_int;
use crate::frame::MacAddress;
use crate::link_state::LinkState;

/// One forwarding rule this pair's route needs installed on one switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStep {
    pub dpid: u64,
    pub src: MacAddress,
    pub dst: MacAddress,
    pub out_port: u16,
}

pub struct Router {
    k: u32,
    n: u64,
    num_hosts: u64,
    g: Vec<u64>,
}

impl Router {
    pub fn new(k: u32, n: u64) -> Self {
        let (t, g) = t_g(k, n);
        Router { k, n, num_hosts: t[k as usize], g }
    }

    pub fn num_hosts(&self) -> u64 {
        self.num_hosts
    }

    /// Computes the full bidirectional set of switch-to-switch installs
    /// for `(mac_src, mac_dst)` (spec §4.4, closing paragraph). Pure: does
    /// not consult or mutate the `FlowTable` mirror, so it can be called
    /// freely to recompute a route after a link event.
    pub fn route(&self, links: &LinkState, mac_src: MacAddress, mac_dst: MacAddress) -> Vec<RouteStep> {
        let t_src = addressing::tuple_of(mac_bytes_to_int(&mac_src), self.k, self.n);
        let t_dst = addressing::tuple_of(mac_bytes_to_int(&mac_dst), self.k, self.n);

        let mut steps = Vec::new();
        self.dcell_route(&mut steps, links, &t_src, &t_dst, mac_src, mac_dst);

        let dst_switch = addressing::host_of(&t_dst, self.n);
        let src_switch = addressing::host_of(&t_src, self.n);
        steps.push(RouteStep { dpid: dst_switch, src: mac_src, dst: mac_dst, out_port: 1 });
        steps.push(RouteStep { dpid: src_switch, src: mac_dst, dst: mac_src, out_port: 1 });

        debug!(?mac_src, ?mac_dst, installs = steps.len(), "computed route");
        steps
    }

    /// The recursive core (spec §4.4). Appends every switch-to-switch
    /// install this leg of the path needs to `steps`; installs nothing
    /// for the final host-facing leg, which `build_route` adds once the
    /// whole switch path is known.
    fn dcell_route(
        &self,
        steps: &mut Vec<RouteStep>,
        links: &LinkState,
        t_src: &[u64],
        t_dst: &[u64],
        mac_src: MacAddress,
        mac_dst: MacAddress,
    ) {
        if t_src == t_dst {
            return;
        }

        let prefix = addressing::common_prefix(t_src, t_dst);
        let l = prefix.len();

        if l == self.k as usize {
            let host_src = addressing::host_of(t_src, self.n);
            let host_dst = addressing::host_of(t_dst, self.n);
            let mini = addressing::mini_dpid(host_src, self.num_hosts, self.n);

            if links.is_bad(mini, host_src) || links.is_bad(mini, host_dst) {
                warn!(mini, host_src, host_dst, "rack failure, abandoning leg");
                return;
            }

            let port_to_dst = (t_dst[self.k as usize] % self.n) as u16 + 1;
            let port_to_src = (t_src[self.k as usize] % self.n) as u16 + 1;
            steps.push(RouteStep { dpid: mini, src: mac_src, dst: mac_dst, out_port: port_to_dst });
            steps.push(RouteStep { dpid: mini, src: mac_dst, dst: mac_src, out_port: port_to_src });
            steps.push(RouteStep { dpid: host_src, src: mac_src, dst: mac_dst, out_port: 2 });
            steps.push(RouteStep { dpid: host_dst, src: mac_dst, dst: mac_src, out_port: 2 });
            return;
        }

        let s = t_src[l];
        let d = t_dst[l];
        let (mid_src, mid_dst) = self.middle_link(&prefix, s, d);
        let dpid_src = addressing::host_of(&mid_src, self.n);
        let dpid_dst = addressing::host_of(&mid_dst, self.n);

        if links.is_bad(dpid_src, dpid_dst) {
            match self.select_proxy(links, t_src, t_dst, &prefix) {
                Some(proxy) => {
                    self.dcell_route(steps, links, t_src, &proxy, mac_src, mac_dst);
                    self.dcell_route(steps, links, &proxy, t_dst, mac_src, mac_dst);
                }
                None => {
                    warn!(?t_src, ?t_dst, "no proxy available, abandoning pair");
                }
            }
            return;
        }

        let out_port = (self.k as usize - l + 2) as u16;
        steps.push(RouteStep { dpid: dpid_src, src: mac_src, dst: mac_dst, out_port });
        steps.push(RouteStep { dpid: dpid_dst, src: mac_dst, dst: mac_src, out_port });

        self.dcell_route(steps, links, t_src, &mid_src, mac_src, mac_dst);
        self.dcell_route(steps, links, &mid_dst, t_dst, mac_src, mac_dst);
    }

    /// The pre-wired inter-sub-cell link connecting sub-cell `s` to
    /// sub-cell `d` under `prefix` (spec §4.4.1). `s != d`, since the
    /// caller only invokes this past the common-prefix length.
    pub fn middle_link(&self, prefix: &[u64], s: u64, d: u64) -> (Vec<u64>, Vec<u64>) {
        let swap = s > d;
        let (s, d) = if swap { (d, s) } else { (s, d) };

        let l = prefix.len() as u32;
        let suffix_k = self.k - l - 1;
        let suffix_src = addressing::tuple_of(d, suffix_k, self.n);
        let suffix_dst = addressing::tuple_of(s + 1, suffix_k, self.n);

        let mut mid_src: Vec<u64> = prefix.to_vec();
        mid_src.push(s);
        mid_src.extend(suffix_src);

        let mut mid_dst: Vec<u64> = prefix.to_vec();
        mid_dst.push(d);
        mid_dst.extend(suffix_dst);

        if swap {
            (mid_dst, mid_src)
        } else {
            (mid_src, mid_dst)
        }
    }

    /// Detours around a broken middle link via the first neighbouring
    /// sub-cell whose link to `T_src`'s sub-cell is still up (spec
    /// §4.4.2). Returns the proxy tuple (a host in that neighbour
    /// sub-cell), or `None` if every neighbour's link is also down.
    pub fn select_proxy(
        &self,
        links: &LinkState,
        t_src: &[u64],
        t_dst: &[u64],
        prefix: &[u64],
    ) -> Option<Vec<u64>> {
        let l = prefix.len();
        let d_count = self.g[self.k as usize - l];

        for i in 1..d_count {
            let idx = (t_src[l] + i) % d_count;
            if idx == t_dst[l] {
                continue;
            }
            let (m_src, m_dst) = self.middle_link(prefix, t_src[l], idx);
            let dpid_src = addressing::host_of(&m_src, self.n);
            let dpid_dst = addressing::host_of(&m_dst, self.n);
            if links.is_bad(dpid_src, dpid_dst) {
                continue;
            }
            return Some(m_dst);
        }

        None
    }
}
