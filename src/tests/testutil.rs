//! A recording, in-memory stand-in for a real OpenFlow socket connection
//! (analogous to the teacher's `CableSimulator`), so control-plane and
//! router tests can assert on what would have been sent to a switch
//! without any actual I/O.

use std::io;

use crate::openflow::{OfpFlowMod, OfpPacketOut, SwitchConnection};

#[derive(Debug, Default)]
pub struct RecordingConnection {
    pub flow_mods: Vec<OfpFlowMod>,
    pub packet_outs: Vec<OfpPacketOut>,
}

impl RecordingConnection {
    pub fn new() -> Self {
        RecordingConnection::default()
    }
}

impl SwitchConnection for RecordingConnection {
    fn send_flow_mod(&mut self, msg: OfpFlowMod) -> io::Result<()> {
        self.flow_mods.push(msg);
        Ok(())
    }

    fn send_packet_out(&mut self, msg: OfpPacketOut) -> io::Result<()> {
        self.packet_outs.push(msg);
        Ok(())
    }
}
