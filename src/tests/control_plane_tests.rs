#![allow(non_snake_case)]

use crate::config::Config;
use crate::control_plane::ControlPlane;
use crate::openflow::ControllerEvent;
use crate::tests::testutil::RecordingConnection;

fn connect_all(cp: &mut ControlPlane) {
    let num_switches = cp.num_switches();
    for dpid in 1..=num_switches {
        cp.handle_event(ControllerEvent::ConnectionUp {
            dpid,
            connection: Box::new(RecordingConnection::new()),
        });
    }
}

#[test]
fn ConnectionUp_LastSwitchRegistering_TriggersBuildAllRoutes() {
    // Arrange — spec §8 scenario 1: k=0, n=3, 4 switches total.
    let mut cp = ControlPlane::new(Config::new(0, 3));

    // Act
    connect_all(&mut cp);

    // Assert: host-switch 1 already holds its pair's forwarding entries.
    assert!(!cp.flow_table().entries_on(1).is_empty());
}

#[test]
fn ConnectionUp_BeforeEveryoneConnects_DoesNotBuildRoutes() {
    // Arrange
    let mut cp = ControlPlane::new(Config::new(0, 3));

    // Act: connect all but one switch.
    let num_switches = cp.num_switches();
    for dpid in 1..num_switches {
        cp.handle_event(ControllerEvent::ConnectionUp {
            dpid,
            connection: Box::new(RecordingConnection::new()),
        });
    }

    // Assert
    assert!(cp.flow_table().entries_on(1).is_empty());
}

#[test]
fn LinkEvent_Removed_MarksLinkBadAndReroutesAffectedPairs() {
    // Arrange — spec §8 scenario 3: k=1, n=4, link (4, 17) down.
    let mut cp = ControlPlane::new(Config::new(1, 4));
    connect_all(&mut cp);

    // Act
    cp.handle_event(ControllerEvent::LinkEvent { dpid1: 4, port1: 3, dpid2: 17, port2: 3, added: false });

    // Assert
    assert!(cp.link_state().is_bad(4, 17));
}

#[test]
fn LinkEvent_AddedAfterRemoved_ClearsBadSetAndRestoresDirectRoute() {
    // Arrange — spec §8 scenario 4.
    let mut cp = ControlPlane::new(Config::new(1, 4));
    connect_all(&mut cp);
    cp.handle_event(ControllerEvent::LinkEvent { dpid1: 4, port1: 3, dpid2: 17, port2: 3, added: false });

    // Act
    cp.handle_event(ControllerEvent::LinkEvent { dpid1: 4, port1: 3, dpid2: 17, port2: 3, added: true });

    // Assert
    assert!(!cp.link_state().is_bad(4, 17));
}

#[test]
fn LinkEvent_RemovedTwice_SecondCallIsANoOp() {
    // Arrange
    let mut cp = ControlPlane::new(Config::new(1, 4));
    connect_all(&mut cp);
    cp.handle_event(ControllerEvent::LinkEvent { dpid1: 4, port1: 3, dpid2: 17, port2: 3, added: false });

    // Act: marking an already-bad link down again must not re-trigger a
    // rebuild pass (LinkState::mark_down returns false the second time).
    cp.handle_event(ControllerEvent::LinkEvent { dpid1: 4, port1: 3, dpid2: 17, port2: 3, added: false });

    // Assert
    assert!(cp.link_state().is_bad(4, 17));
}
