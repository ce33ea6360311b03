#![allow(non_snake_case)]

use crate::flow_table::FlowTable;

fn mac(h: u8) -> [u8; 6] {
    [0, 0, 0, 0, 0, h]
}

#[test]
fn Add_RepeatedSameArgs_LeavesTableUnchanged() {
    // Arrange
    let mut table = FlowTable::new();

    // Act
    table.add(1, mac(1), mac(2), 3);
    table.add(1, mac(1), mac(2), 3);

    // Assert
    assert_eq!(table.get(1, mac(1), mac(2)), Some(3));
    assert_eq!(table.entries_on(1).len(), 1);
}

#[test]
fn Add_NewPort_ReplacesPriorEntry() {
    // Arrange
    let mut table = FlowTable::new();
    table.add(1, mac(1), mac(2), 3);

    // Act
    table.add(1, mac(1), mac(2), 7);

    // Assert
    assert_eq!(table.get(1, mac(1), mac(2)), Some(7));
}

#[test]
fn Remove_WithDpidOnly_ClearsEveryEntryOnThatSwitch() {
    // Arrange
    let mut table = FlowTable::new();
    table.add(1, mac(1), mac(2), 3);
    table.add(1, mac(2), mac(1), 4);
    table.add(2, mac(1), mac(2), 5);

    // Act
    table.remove(Some(1), None, None, None);

    // Assert
    assert!(table.entries_on(1).is_empty());
    assert_eq!(table.get(2, mac(1), mac(2)), Some(5));
}

#[test]
fn Remove_WithSrcAndDst_LeavesOtherPairsOnSameSwitchAlone() {
    // Arrange
    let mut table = FlowTable::new();
    table.add(1, mac(1), mac(2), 3);
    table.add(1, mac(3), mac(4), 5);

    // Act
    table.remove(Some(1), Some(mac(1)), Some(mac(2)), None);

    // Assert
    assert_eq!(table.get(1, mac(1), mac(2)), None);
    assert_eq!(table.get(1, mac(3), mac(4)), Some(5));
}

#[test]
fn Remove_NoDpid_ActsAsWildcardAcrossEverySwitch() {
    // Arrange
    let mut table = FlowTable::new();
    table.add(1, mac(1), mac(2), 3);
    table.add(2, mac(1), mac(2), 9);

    // Act
    table.remove(None, Some(mac(1)), Some(mac(2)), None);

    // Assert
    assert_eq!(table.get(1, mac(1), mac(2)), None);
    assert_eq!(table.get(2, mac(1), mac(2)), None);
}

#[test]
fn EntriesVia_FiltersToMatchingOutPort() {
    // Arrange
    let mut table = FlowTable::new();
    table.add(1, mac(1), mac(2), 3);
    table.add(1, mac(2), mac(1), 4);

    // Act
    let via_three = table.entries_via(1, 3);

    // Assert
    assert_eq!(via_three, vec![(mac(1), mac(2))]);
}
