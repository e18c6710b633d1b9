//! End-to-end scenarios against the public `BlockEvents` interface, mirroring
//! the synthetic toy chain walked through in SPEC_FULL.md §8.

use fts_core::{BlockControl, BlockEvents, FlatSubsidy, Outpoint, Tracker, TrackerConfig};
use std::sync::Arc;

fn hash(byte: u8) -> [u8; 32] {
    [byte; 32]
}

fn toy_tracker(config: TrackerConfig) -> Tracker {
    Tracker::with_subsidy_schedule(config, Arc::new(FlatSubsidy::new(50)))
}

#[test]
fn four_block_chain_conserves_every_satoshi() {
    let mut tracker = toy_tracker(TrackerConfig::default());

    // Block 1: coinbase only, value 50.
    assert_eq!(tracker.start_block(1, 4), BlockControl::Continue);
    tracker.start_tx(hash(1));
    tracker.end_output(50, 0);
    tracker.end_tx().unwrap();
    tracker.end_block().unwrap();

    let cb1 = Outpoint::new(hash(1), 0);
    assert_eq!(tracker.find(0), Some(cb1));
    assert_eq!(tracker.find(49), Some(cb1));
    assert_eq!(tracker.find(50), None);

    // Block 2: coinbase (value 50) + tx A spends cb1 into [20, 30].
    assert_eq!(tracker.start_block(2, 4), BlockControl::Continue);
    tracker.start_tx(hash(2));
    tracker.end_output(50, 0);
    tracker.end_tx().unwrap();

    tracker.start_tx(hash(0xA));
    tracker.edge(cb1).unwrap();
    tracker.end_output(20, 0);
    tracker.end_output(30, 1);
    tracker.end_tx().unwrap();
    tracker.end_block().unwrap();

    let cb2 = Outpoint::new(hash(2), 0);
    let a0 = Outpoint::new(hash(0xA), 0);
    let a1 = Outpoint::new(hash(0xA), 1);
    assert_eq!(tracker.find(0), Some(a0));
    assert_eq!(tracker.find(19), Some(a0));
    assert_eq!(tracker.find(20), Some(a1));
    assert_eq!(tracker.find(49), Some(a1));
    assert_eq!(tracker.find(50), Some(cb2));

    // P4: ranges assigned to outputs are contiguous prefixes of the input stream.
    assert_eq!(tracker.wrapup().utxo_count, 3);

    // Block 3: split one input range across four outputs — P4 FIFO locality.
    assert_eq!(tracker.start_block(3, 4), BlockControl::Continue);
    tracker.start_tx(hash(3));
    tracker.end_output(50, 0);
    tracker.end_tx().unwrap();

    tracker.start_tx(hash(0xB));
    tracker.edge(a1).unwrap(); // a1 holds [20, 50), a 30-satoshi range
    tracker.end_output(10, 0);
    tracker.end_output(10, 1);
    tracker.end_output(10, 2);
    tracker.end_tx().unwrap();
    tracker.end_block().unwrap();

    let b0 = Outpoint::new(hash(0xB), 0);
    let b1 = Outpoint::new(hash(0xB), 1);
    let b2 = Outpoint::new(hash(0xB), 2);
    assert_eq!(tracker.find(20), Some(b0));
    assert_eq!(tracker.find(29), Some(b0));
    assert_eq!(tracker.find(30), Some(b1));
    assert_eq!(tracker.find(39), Some(b1));
    assert_eq!(tracker.find(40), Some(b2));
    assert_eq!(tracker.find(49), Some(b2));

    // Integrity holds across every block boundary so far: no holes, no
    // overlaps, and the final `hi` matches total satoshis minted.
    let report = tracker.integrity_check();
    assert!(report.is_clean());
    assert_eq!(report.final_hi, 150);

    // Block 4: cutoff takes effect *before* any of its events are processed.
    let mut cut_off = toy_tracker(TrackerConfig { cutoff_block: Some(4) });
    cut_off.start_block(1, 4);
    cut_off.start_tx(hash(1));
    cut_off.end_output(50, 0);
    cut_off.end_tx().unwrap();
    cut_off.end_block().unwrap();
    assert_eq!(cut_off.start_block(4, 4), BlockControl::Cutoff);
    assert_eq!(cut_off.wrapup().utxo_count, 1);
}

#[test]
fn find_is_sound_and_complete_for_every_minted_satoshi() {
    let mut tracker = toy_tracker(TrackerConfig::default());
    for h in 1..=5u64 {
        tracker.start_block(h, 5);
        tracker.start_tx(hash(h as u8));
        tracker.end_output(50, 0);
        tracker.end_tx().unwrap();
        tracker.end_block().unwrap();
    }

    let total_minted = 5 * 50;
    for s in 0..total_minted {
        let outpt = tracker.find(s).expect("every minted satoshi must resolve");
        // Soundness: the satoshi must lie inside a range actually assigned to
        // the returned outpoint's block.
        let block = s / 50 + 1;
        assert_eq!(outpt, Outpoint::new(hash(block as u8), 0));
    }
    assert_eq!(tracker.find(total_minted), None);
}
