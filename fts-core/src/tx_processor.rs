//! The FIFO bucketing algorithm (§4.3): splits a transaction's concatenated
//! input ranges across its outputs, in order, and reports whatever is left
//! over as the block's fee contribution.

use crate::error::{FtsError, Result};
use crate::forward_map::ForwardMap;
use crate::inverse_map::InverseMap;
use crate::outpoint::Outpoint;
use crate::range::SatoshiRange;
use std::collections::HashSet;
use tracing::info;

/// What's left after a transaction's outputs have been filled: any unconsumed
/// tail of the current input range, plus any wholly-unconsumed input ranges.
/// This becomes the block's fee contribution for non-coinbase transactions,
/// or is destroyed into the sentinel for the coinbase transaction itself.
pub struct Leftover {
    pub ranges: Vec<SatoshiRange>,
}

impl Leftover {
    pub fn total(&self) -> u64 {
        self.ranges.iter().map(SatoshiRange::len).sum()
    }
}

/// Runs the FIFO split described in §4.3 and mutates `forward`/`inverse` to
/// reflect the new owning outputs. Returns the leftover (fee) ranges.
///
/// `debug_targets`, when non-empty, causes a `tracing::info!` line to be
/// emitted for every traced satoshi as it lands in an output, in the exact
/// shape described in SPEC_FULL.md §4.3.
#[allow(clippy::too_many_arguments)]
pub fn process_transaction(
    tx_hash: [u8; 32],
    tx_hash_hex: &str,
    in_ranges: Vec<SatoshiRange>,
    out_values: &[u64],
    is_coinbase: bool,
    forward: &mut ForwardMap,
    inverse: &mut InverseMap,
    debug_targets: &HashSet<u64>,
) -> Result<Leftover> {
    let mut in_iter = in_ranges.into_iter();
    let mut cur: Option<SatoshiRange> = None;

    for (i, &value) in out_values.iter().enumerate() {
        let outpt = Outpoint::new(tx_hash, i as i32);
        let mut out_ranges = Vec::new();
        let mut remaining = value;
        let mut emitted: u64 = 0;

        while remaining > 0 {
            let range = match cur.take() {
                Some(r) => r,
                None => in_iter.next().ok_or_else(|| FtsError::OutputsExceedInputs {
                    txhash: tx_hash_hex.to_string(),
                })?,
            };

            let take = range.len().min(remaining);
            let piece = SatoshiRange::new(range.lo, range.lo + take)
                .expect("take is always > 0 and within range");

            if range.len() > take {
                cur = Some(SatoshiRange::new(range.lo + take, range.hi).expect("non-empty tail"));
            }

            remaining -= take;
            inverse.insert(piece, outpt);

            if !debug_targets.is_empty() {
                trace_debug_targets(piece, emitted, outpt, is_coinbase, debug_targets);
            }

            emitted += take;
            out_ranges.push(piece);
        }

        forward.insert(outpt, out_ranges);
    }

    let mut leftover = Vec::new();
    if let Some(r) = cur {
        leftover.push(r);
    }
    leftover.extend(in_iter);

    Ok(Leftover { ranges: leftover })
}

fn trace_debug_targets(
    piece: SatoshiRange,
    emitted_before_piece: u64,
    outpt: Outpoint,
    is_coinbase: bool,
    debug_targets: &HashSet<u64>,
) {
    for sat in piece.lo..piece.hi {
        if debug_targets.contains(&sat) {
            let offset = emitted_before_piece + (sat - piece.lo);
            info!(
                "debug:{} went to {}:{} offset:{}",
                sat, outpt, is_coinbase, offset
            );
        }
    }
}
