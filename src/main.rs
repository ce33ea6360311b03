use std::sync::mpsc;

use clap::Parser;
use dcell_controller::config::Config;
use dcell_controller::control_plane::ControlPlane;

/// Thin entry point: parse configuration, start logging, and hand off to
/// the event loop. Wiring a real OpenFlow socket server's connection
/// threads to the other end of this channel is the external library's
/// job (spec §1); this binary only shows the shape of that handoff.
fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    tracing::info!(?config, "starting dcell-controller");

    let mut control_plane = ControlPlane::new(config);
    let (_tx, rx) = mpsc::channel();
    control_plane.run(rx);
}
