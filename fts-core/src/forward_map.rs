//! UTXO → ranges. Hash-indexed since, unlike the inverse map, nothing here
//! needs predecessor/successor queries (§9 "Outpoint key strategy").

use crate::outpoint::Outpoint;
use crate::range::SatoshiRange;
use std::collections::HashMap;

#[derive(Default)]
pub struct ForwardMap {
    utxos: HashMap<Outpoint, Vec<SatoshiRange>>,
}

impl ForwardMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly-created or newly-received UTXO's range list.
    pub fn insert(&mut self, outpt: Outpoint, ranges: Vec<SatoshiRange>) {
        self.utxos.insert(outpt, ranges);
    }

    /// Removes a spent UTXO, returning the ranges it had held.
    pub fn remove(&mut self, outpt: &Outpoint) -> Option<Vec<SatoshiRange>> {
        self.utxos.remove(outpt)
    }

    pub fn get(&self, outpt: &Outpoint) -> Option<&[SatoshiRange]> {
        self.utxos.get(outpt).map(Vec::as_slice)
    }

    pub fn contains(&self, outpt: &Outpoint) -> bool {
        self.utxos.contains_key(outpt)
    }

    /// Number of live UTXOs, reported in the wrapup summary as "UTXO count".
    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }
}
