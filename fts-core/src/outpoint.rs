//! The primary key for the forward map: a transaction hash plus an output index.

use std::fmt;

/// Sentinel output index used for the coinbase "destruction" sink (§4.5).
///
/// A range is parked under `(coinbase_tx_hash, COINBASE_SINK_INDEX)` when a block's
/// coinbase transaction declares less output value than its accumulated input
/// (subsidy + fees); it stays in the inverse map so conservation still holds, but it
/// is never present in the forward map.
pub const COINBASE_SINK_INDEX: i32 = -1;

/// A reference to a specific transaction output: `(tx hash, output index)`.
///
/// Ordering is lexicographic on the 32-byte hash, then by `outindex`. `[u8; 32]`
/// already derives `Ord` as a byte-wise lexicographic compare, so deriving `Ord`
/// here gives the correct total order without hand-rolling the comparison loop.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outpoint {
    pub txhash: [u8; 32],
    pub outindex: i32,
}

impl Outpoint {
    pub fn new(txhash: [u8; 32], outindex: i32) -> Self {
        Self { txhash, outindex }
    }

    /// Builds the sentinel outpoint that absorbs a block's unspendable leftover.
    pub fn coinbase_sink(coinbase_txhash: [u8; 32]) -> Self {
        Self::new(coinbase_txhash, COINBASE_SINK_INDEX)
    }

    /// Whether this outpoint is the coinbase destruction sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.outindex == COINBASE_SINK_INDEX
    }
}

impl fmt::Debug for Outpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", hex_of(&self.txhash), self.outindex)
    }
}

impl fmt::Display for Outpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

fn hex_of(bytes: &[u8; 32]) -> String {
    let mut s = String::with_capacity(64);
    for b in bytes {
        s.push_str(&format!("{:02x}", b));
    }
    s
}
