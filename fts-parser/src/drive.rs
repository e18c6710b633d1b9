//! Turns a decoded [`bitcoin::Block`] into calls against the
//! [`fts_core::BlockEvents`] callback surface (§6 of SPEC_FULL.md).

use anyhow::{Context, Result};
use bitcoin::Block;
use fts_core::{BlockControl, BlockEvents, Outpoint};

/// Drives one block's worth of events into `events`. Returns the
/// [`BlockControl`] the tracker reported at `start_block` — the caller should
/// stop feeding blocks as soon as this is [`BlockControl::Cutoff`].
pub fn drive_block<E: BlockEvents>(
    events: &mut E,
    height: u64,
    chain_size: u64,
    block: &Block,
) -> Result<BlockControl> {
    if events.start_block(height, chain_size) == BlockControl::Cutoff {
        return Ok(BlockControl::Cutoff);
    }

    for tx in &block.txdata {
        let txid = tx.compute_txid();
        events.start_tx(txid_bytes(&txid));

        if !tx.is_coinbase() {
            for input in &tx.input {
                let prev = input.previous_output;
                let outpoint = Outpoint::new(txid_bytes(&prev.txid), prev.vout as i32);
                events
                    .edge(outpoint)
                    .with_context(|| format!("processing input of tx {}", txid))?;
            }
        }

        for (index, output) in tx.output.iter().enumerate() {
            events.end_output(output.value.to_sat(), index as u32);
        }

        events
            .end_tx()
            .with_context(|| format!("committing tx {}", txid))?;
    }

    events
        .end_block()
        .with_context(|| format!("closing block {}", height))?;

    Ok(BlockControl::Continue)
}

fn txid_bytes(txid: &bitcoin::Txid) -> [u8; 32] {
    use bitcoin::hashes::Hash;
    txid.to_byte_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::absolute::LockTime;
    use bitcoin::hashes::Hash;
    use bitcoin::transaction::Version;
    use bitcoin::{Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness};
    use fts_core::{FlatSubsidy, Tracker, TrackerConfig};
    use std::sync::Arc;

    fn toy_tracker(config: TrackerConfig) -> Tracker {
        Tracker::with_subsidy_schedule(config, Arc::new(FlatSubsidy::new(50)))
    }

    fn coinbase_tx(value: u64) -> Transaction {
        Transaction {
            version: Version::ONE,
            lock_time: LockTime::ZERO,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: ScriptBuf::new(),
                sequence: Sequence::MAX,
                witness: Witness::new(),
            }],
            output: vec![TxOut {
                value: Amount::from_sat(value),
                script_pubkey: ScriptBuf::new(),
            }],
        }
    }

    fn block_with(txs: Vec<Transaction>) -> Block {
        use bitcoin::block::{Header, Version as BVersion};
        use bitcoin::{BlockHash, CompactTarget, TxMerkleNode};

        Block {
            header: Header {
                version: BVersion::ONE,
                prev_blockhash: BlockHash::all_zeros(),
                merkle_root: TxMerkleNode::all_zeros(),
                time: 0,
                bits: CompactTarget::from_consensus(0),
                nonce: 0,
            },
            txdata: txs,
        }
    }

    #[test]
    fn drives_a_coinbase_only_block() {
        let mut tracker = toy_tracker(TrackerConfig::default());
        let block = block_with(vec![coinbase_tx(50)]);

        let control = drive_block(&mut tracker, 1, 1, &block).unwrap();
        assert_eq!(control, BlockControl::Continue);
        assert_eq!(tracker.find(0).is_some(), true);
        assert_eq!(tracker.find(49).is_some(), true);
        assert_eq!(tracker.find(50), None);
    }

    #[test]
    fn cutoff_is_reported_before_processing_transactions() {
        let mut tracker = toy_tracker(TrackerConfig { cutoff_block: Some(1) });
        let block = block_with(vec![coinbase_tx(50)]);
        let control = drive_block(&mut tracker, 1, 1, &block).unwrap();
        assert_eq!(control, BlockControl::Cutoff);
        assert_eq!(tracker.wrapup().utxo_count, 0);
    }
}
