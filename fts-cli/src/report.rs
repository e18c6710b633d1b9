//! The stdout report printed at wrapup (§6): UTXO/range counts and per-target
//! lookup results. Pass timings go through `tracing::info!` instead — they
//! are diagnostics, not the program's actual output.

use fts_core::{Outpoint, Tracker, WrapupReport};

pub fn print_counts(report: &WrapupReport) {
    println!("UTXO count: {}", report.utxo_count);
    println!("Range count: {}", report.range_count);
}

/// Prints one line per target satoshi: `<sat> <hex_txhash> <outindex>` if
/// found, `<sat>  0` (double space, matching the source's "no owner" marker)
/// otherwise.
pub fn print_lookups(tracker: &Tracker, targets: &[u64]) {
    for &sat in targets {
        match tracker.find(sat) {
            Some(outpt) => println!("{} {}", sat, format_outpoint(&outpt)),
            None => println!("{}  0", sat),
        }
    }
}

fn format_outpoint(outpt: &Outpoint) -> String {
    let hex: String = outpt.txhash.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{} {}", hex, outpt.outindex)
}
