//! The block processor (§4.4): drives the per-transaction flow and the
//! coinbase sweep, and owns the forward/inverse maps.

use crate::error::Result;
use crate::events::{BlockControl, BlockEvents};
use crate::forward_map::ForwardMap;
use crate::integrity::{integrity_check, IntegrityReport};
use crate::inverse_map::InverseMap;
use crate::outpoint::Outpoint;
use crate::range::SatoshiRange;
use crate::subsidy::{FlatSubsidy, SubsidySchedule};
use crate::tx_processor::process_transaction;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Summary returned by [`Tracker::wrapup`] (§6 "Stdout report at wrapup").
/// Pass timings and target-file lookups are the caller's responsibility
/// (`fts-cli`); this report carries only what the ledger itself knows.
#[derive(Debug, Clone, Copy)]
pub struct WrapupReport {
    pub utxo_count: usize,
    pub range_count: usize,
    pub total_minted: u64,
}

/// Optional cutoff height: only process blocks strictly below this height.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackerConfig {
    pub cutoff_block: Option<u64>,
}

/// The satoshi-range ledger. Implements [`BlockEvents`] so an external parser
/// can drive it directly; also exposes [`Tracker::find`] and
/// [`Tracker::integrity_check`] for querying the resulting state.
pub struct Tracker {
    forward: ForwardMap,
    inverse: InverseMap,
    subsidy: Arc<dyn SubsidySchedule>,
    config: TrackerConfig,
    debug_targets: HashSet<u64>,

    cur_height: u64,
    total_minted: u64,

    cur_tx_hash: [u8; 32],
    cur_tx_has_inputs: bool,
    in_ranges: Vec<SatoshiRange>,
    out_values: Vec<u64>,

    coinbase_tx_hash: [u8; 32],
    coinbase_in_ranges: Vec<SatoshiRange>,
    coinbase_out_values: Vec<u64>,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_subsidy_schedule(config, Arc::new(FlatSubsidy::default()))
    }

    pub fn with_subsidy_schedule(
        config: TrackerConfig,
        subsidy: Arc<dyn SubsidySchedule>,
    ) -> Self {
        Self {
            forward: ForwardMap::new(),
            inverse: InverseMap::new(),
            subsidy,
            config,
            debug_targets: HashSet::new(),
            cur_height: 0,
            total_minted: 0,
            cur_tx_hash: [0u8; 32],
            cur_tx_has_inputs: false,
            in_ranges: Vec::new(),
            out_values: Vec::new(),
            coinbase_tx_hash: [0u8; 32],
            coinbase_in_ranges: Vec::new(),
            coinbase_out_values: Vec::new(),
        }
    }

    /// Registers the set of satoshis to trace (from `fts.debug.target`, §6).
    pub fn set_debug_targets(&mut self, targets: HashSet<u64>) {
        self.debug_targets = targets;
    }

    /// Point query: which outpoint currently owns `satoshi`? (§4.5)
    pub fn find(&self, satoshi: u64) -> Option<Outpoint> {
        if satoshi >= self.total_minted {
            return None;
        }
        self.inverse.locate(satoshi).map(|(_, outpt)| outpt)
    }

    /// Runs the integrity scan (§4.6) over the current inverse map.
    pub fn integrity_check(&self) -> IntegrityReport {
        integrity_check(&self.inverse)
    }

    fn process(&mut self, tx_hash: [u8; 32], is_coinbase: bool) -> Result<Vec<SatoshiRange>> {
        let (in_ranges, out_values) = if is_coinbase {
            (
                std::mem::take(&mut self.coinbase_in_ranges),
                std::mem::take(&mut self.coinbase_out_values),
            )
        } else {
            (
                std::mem::take(&mut self.in_ranges),
                self.out_values.clone(),
            )
        };

        let tx_hash_hex = hex_string(&tx_hash);
        let leftover = process_transaction(
            tx_hash,
            &tx_hash_hex,
            in_ranges,
            &out_values,
            is_coinbase,
            &mut self.forward,
            &mut self.inverse,
            &self.debug_targets,
        )?;

        Ok(leftover.ranges)
    }
}

impl BlockEvents for Tracker {
    fn start_block(&mut self, height: u64, _chain_size: u64) -> BlockControl {
        if let Some(cutoff) = self.config.cutoff_block {
            if height >= cutoff {
                return BlockControl::Cutoff;
            }
        }
        self.cur_height = height;
        self.coinbase_in_ranges.clear();
        self.coinbase_out_values.clear();
        self.coinbase_tx_hash = [0u8; 32];
        BlockControl::Continue
    }

    fn start_tx(&mut self, tx_hash: [u8; 32]) {
        self.in_ranges.clear();
        self.out_values.clear();
        self.cur_tx_hash = tx_hash;
        self.cur_tx_has_inputs = false;
    }

    fn edge(&mut self, prev_outpoint: Outpoint) -> Result<()> {
        self.cur_tx_has_inputs = true;
        let ranges = self
            .forward
            .remove(&prev_outpoint)
            .ok_or_else(|| crate::error::FtsError::MissingUtxo {
                outpoint: format!("{}", prev_outpoint),
            })?;
        for range in &ranges {
            self.inverse.erase(range);
        }
        self.in_ranges.extend(ranges);
        Ok(())
    }

    fn end_output(&mut self, value: u64, _out_index: u32) {
        self.out_values.push(value);
    }

    fn end_tx(&mut self) -> Result<()> {
        if self.cur_tx_has_inputs {
            let tx_hash = self.cur_tx_hash;
            let leftover = self.process(tx_hash, false)?;
            self.coinbase_in_ranges.extend(leftover);
        } else {
            let subsidy_lo = self.subsidy.subsidy_before(self.cur_height);
            let subsidy_hi = self.subsidy.subsidy_before(self.cur_height + 1);
            self.coinbase_in_ranges.clear();
            self.coinbase_in_ranges
                .push(SatoshiRange::new(subsidy_lo, subsidy_hi)?);
            self.coinbase_out_values = std::mem::take(&mut self.out_values);
            self.coinbase_tx_hash = self.cur_tx_hash;
            self.total_minted = self.total_minted.max(subsidy_hi);
        }
        Ok(())
    }

    fn end_block(&mut self) -> Result<()> {
        let tx_hash = self.coinbase_tx_hash;
        let leftover = self.process(tx_hash, true)?;
        if !leftover.is_empty() {
            let sink = Outpoint::coinbase_sink(tx_hash);
            let total: u64 = leftover.iter().map(SatoshiRange::len).sum();
            info!(
                "destroyed {} satoshis into coinbase sink {}",
                total, sink
            );
            for range in leftover {
                self.inverse.insert(range, sink);
            }
        }
        Ok(())
    }

    fn needs_tx_hash(&self) -> bool {
        true
    }
}

impl Tracker {
    /// Final summary once all blocks (up to any cutoff) have been fed in.
    pub fn wrapup(&mut self) -> WrapupReport {
        WrapupReport {
            utxo_count: self.forward.len(),
            range_count: self.inverse.len(),
            total_minted: self.total_minted,
        }
    }
}

fn hex_string(bytes: &[u8; 32]) -> String {
    let mut s = String::with_capacity(64);
    for b in bytes {
        s.push_str(&format!("{:02x}", b));
    }
    s
}
