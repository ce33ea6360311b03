//! Control-plane core for an SDN controller that routes a DCell data-center
//! interconnect using DFR (DCell Fault-tolerant Routing), a simplified
//! variant of the recursive routing scheme from the DCell paper.

pub mod addressing;
pub mod config;
pub mod control_plane;
pub mod encoding;
pub mod error;
pub mod flow_table;
pub mod frame;
pub mod link_state;
pub mod openflow;
pub mod router;
pub mod switch_session;
