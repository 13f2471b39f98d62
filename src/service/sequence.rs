//! Request sequencing
//!
//! Every request gets an id from one monotonic counter. For each endpoint
//! only the most recently issued id is current; responses carrying any
//! other id are stale and must not touch view state.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Search,
    Summary,
    Predict,
    TopPlaces,
}

impl RequestKind {
    fn index(self) -> usize {
        match self {
            RequestKind::Search => 0,
            RequestKind::Summary => 1,
            RequestKind::Predict => 2,
            RequestKind::TopPlaces => 3,
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestKind::Search => "Search",
            RequestKind::Summary => "Summary",
            RequestKind::Predict => "Review submission",
            RequestKind::TopPlaces => "Top places",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    /// Latest id issued for this kind, 0 if none yet
    latest: u64,
    in_flight: bool,
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    last_id: u64,
    slots: [Slot; 4],
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new id for `kind`, superseding any outstanding one
    pub fn issue(&mut self, kind: RequestKind) -> u64 {
        self.last_id = self.last_id.wrapping_add(1).max(1);
        let slot = &mut self.slots[kind.index()];
        slot.latest = self.last_id;
        slot.in_flight = true;
        self.last_id
    }

    /// Accept the response for `request_id` if it is the current one
    ///
    /// Returns false for stale ids and for ids already settled.
    pub fn settle(&mut self, kind: RequestKind, request_id: u64) -> bool {
        let slot = &mut self.slots[kind.index()];
        if slot.in_flight && slot.latest == request_id {
            slot.in_flight = false;
            true
        } else {
            false
        }
    }

    /// Mark the outstanding request for `kind` as no longer wanted
    pub fn invalidate(&mut self, kind: RequestKind) {
        self.slots[kind.index()].in_flight = false;
    }

    pub fn in_flight(&self, kind: RequestKind) -> bool {
        self.slots[kind.index()].in_flight
    }

    pub fn latest(&self, kind: RequestKind) -> Option<u64> {
        let latest = self.slots[kind.index()].latest;
        (latest != 0).then_some(latest)
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod sequence_tests;
