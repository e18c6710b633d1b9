//! The callback surface `fts-core` consumes (§6). An external parser (see the
//! `fts-parser` crate) drives a `BlockEvents` implementor through exactly this
//! sequence, per block:
//!
//! `start_block → (start_tx → edge* → end_output* → end_tx)+ → end_block`

use crate::error::Result;
use crate::outpoint::Outpoint;

/// Tells the caller what to do after a `start_block` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockControl {
    /// Keep going — process this block's transactions.
    Continue,
    /// The configured `--at-block` cutoff has been reached; the caller should
    /// call `wrapup` and stop feeding events, without processing this block.
    Cutoff,
}

/// The event interface a satoshi-range tracker implements against an external
/// block/transaction parser. The parser owns decoding, hashing, and directory
/// traversal; this trait is the only thing it is allowed to assume about the
/// tracker's internals.
pub trait BlockEvents {
    /// Begin a new block at the given height. `chain_size` is the parser's
    /// best estimate of total blocks, used only for progress reporting by the
    /// caller — the tracker itself ignores it.
    fn start_block(&mut self, height: u64, chain_size: u64) -> BlockControl;

    /// Begin a new transaction with the given (already-hashed) tx id.
    fn start_tx(&mut self, tx_hash: [u8; 32]);

    /// Record an input that spends `prev_outpoint`.
    fn edge(&mut self, prev_outpoint: Outpoint) -> Result<()>;

    /// Record an output's value at `out_index` (outputs arrive in order).
    fn end_output(&mut self, value: u64, out_index: u32);

    /// Commit the current transaction.
    fn end_tx(&mut self) -> Result<()>;

    /// Close the current block: the stashed coinbase transaction is now
    /// processed against the accumulated fee/subsidy input ranges.
    fn end_block(&mut self) -> Result<()>;

    /// Whether this tracker needs transaction hashes computed at all. Always
    /// `true` for this tracker (the forward/inverse maps are keyed by hash),
    /// kept as an explicit method so the interface documents the dependency
    /// rather than assuming it.
    fn needs_tx_hash(&self) -> bool {
        true
    }
}
