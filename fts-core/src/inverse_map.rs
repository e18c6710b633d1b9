//! Satoshi range → owning outpoint. Must support predecessor queries, so this
//! is backed by a `BTreeMap` rather than the `HashMap` the forward map uses
//! (§9 "Ordered-map requirement").

use crate::outpoint::Outpoint;
use crate::range::SatoshiRange;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct InverseMap {
    ranges: BTreeMap<SatoshiRange, Outpoint>,
}

impl InverseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `range` is now owned by `outpt`. Caller guarantees the
    /// range does not overlap any range already present (§4.2).
    pub fn insert(&mut self, range: SatoshiRange, outpt: Outpoint) {
        self.ranges.insert(range, outpt);
    }

    /// Removes `range` from the map (the UTXO holding it was just spent).
    pub fn erase(&mut self, range: &SatoshiRange) -> Option<Outpoint> {
        self.ranges.remove(range)
    }

    /// Finds the range containing `satoshi`, if any (§4.2 `locate`).
    ///
    /// Find the first stored range with `lo > satoshi` (`BTreeMap::range` over
    /// the upper bound), step back one, and verify it actually covers `satoshi`.
    pub fn locate(&self, satoshi: u64) -> Option<(SatoshiRange, Outpoint)> {
        // Upper bound: the first key with `lo > satoshi` has `lo == satoshi + 1`
        // at minimum, so everything strictly below that probe has `lo <= satoshi`.
        let probe = SatoshiRange { lo: satoshi.saturating_add(1), hi: satoshi.saturating_add(2) };
        let mut before = self.ranges.range(..probe);
        let (range, outpt) = before.next_back()?;
        if range.contains(satoshi) {
            Some((*range, *outpt))
        } else {
            None
        }
    }

    /// Number of range entries, reported in the wrapup summary as "Range count".
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Walks entries in key order. Used by [`crate::integrity::integrity_check`].
    pub fn iter(&self) -> impl Iterator<Item = (&SatoshiRange, &Outpoint)> {
        self.ranges.iter()
    }
}
