//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("flow-mod send to dpid {dpid} failed: {source}")]
    FlowModSend {
        dpid: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    #[error("no connection registered for dpid {0}")]
    UnknownSwitch(u64),

    #[error("invalid DCell tuple: {0}")]
    InvalidTuple(String),
}
