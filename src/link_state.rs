//! The set of currently broken links (spec §4.3), keyed on an ordered
//! `(dpid_low, dpid_high)` pair so lookups don't care which end a caller
//! names first.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct LinkState {
    broken: HashSet<(u64, u64)>,
}

fn canonical(a: u64, b: u64) -> (u64, u64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl LinkState {
    pub fn new() -> Self {
        LinkState { broken: HashSet::new() }
    }

    /// Marks the link between `a` and `b` as down. Returns `true` if it was
    /// previously up (i.e. this call is the one that changed state).
    pub fn mark_down(&mut self, a: u64, b: u64) -> bool {
        self.broken.insert(canonical(a, b))
    }

    /// Marks the link between `a` and `b` as up. Returns `true` if it was
    /// previously down.
    pub fn mark_up(&mut self, a: u64, b: u64) -> bool {
        self.broken.remove(&canonical(a, b))
    }

    pub fn is_bad(&self, a: u64, b: u64) -> bool {
        self.broken.contains(&canonical(a, b))
    }
}
