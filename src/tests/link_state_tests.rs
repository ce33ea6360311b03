#![allow(non_snake_case)]

use crate::link_state::LinkState;

#[test]
fn IsBad_NewLinkState_EverythingStartsUp() {
    // Arrange
    let links = LinkState::new();

    // Act / Assert
    assert!(!links.is_bad(1, 2));
}

#[test]
fn MarkDown_Then_IsBad_IgnoresArgumentOrder() {
    // Arrange
    let mut links = LinkState::new();

    // Act
    links.mark_down(4, 17);

    // Assert
    assert!(links.is_bad(4, 17));
    assert!(links.is_bad(17, 4));
}

#[test]
fn MarkDown_AlreadyDown_ReturnsFalse() {
    // Arrange
    let mut links = LinkState::new();
    links.mark_down(4, 17);

    // Act
    let changed = links.mark_down(17, 4);

    // Assert
    assert!(!changed);
}

#[test]
fn MarkUp_PreviouslyDown_ClearsIt() {
    // Arrange
    let mut links = LinkState::new();
    links.mark_down(4, 17);

    // Act
    let changed = links.mark_up(4, 17);

    // Assert
    assert!(changed);
    assert!(!links.is_bad(4, 17));
}

#[test]
fn MarkUp_NotDown_ReturnsFalse() {
    // Arrange
    let mut links = LinkState::new();

    // Act
    let changed = links.mark_up(4, 17);

    // Assert
    assert!(!changed);
}
