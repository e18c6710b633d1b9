//! `fts`: reads a directory of Bitcoin Core `blkNNNNN.dat` files, feeds every
//! block through a [`fts_core::Tracker`], then reports live UTXO/range
//! counts, looks up any targeted satoshis, and times a random-lookup
//! benchmark. See SPEC_FULL.md §6 for the exact CLI/report contract.

mod cli;
mod report;
mod target_file;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use fts_core::{BlockControl, Tracker, TrackerConfig};
use fts_parser::{block_files, BlockFileReader, MAINNET_MAGIC};
use rand::Rng;
use std::collections::HashSet;
use std::time::Instant;
use tracing::info;

const LOOKUP_BENCHMARK_SAMPLES: u64 = 1_000_000;

fn main() -> Result<()> {
    util::setup_tracing()?;
    util::setup_panic_hook();

    let args = Args::parse();
    let targets = target_file::read_satoshi_list(&args.target_file);
    let debug_targets: HashSet<u64> = target_file::read_satoshi_list(&args.debug_target_file)
        .into_iter()
        .collect();

    let mut tracker = Tracker::new(TrackerConfig {
        cutoff_block: args.cutoff_block(),
    });
    tracker.set_debug_targets(debug_targets);

    let files = block_files(&args.blocks_dir)
        .with_context(|| format!("listing block files in {}", args.blocks_dir.display()))?;
    let chain_size = files.len() as u64;

    let first_pass_start = Instant::now();
    let mut height = 1u64;
    'files: for path in &files {
        let mut reader = BlockFileReader::open(path, MAINNET_MAGIC)
            .with_context(|| format!("opening {}", path.display()))?;
        while let Some(block) = reader
            .next_block()
            .with_context(|| format!("reading block from {}", path.display()))?
        {
            let control = fts_parser::drive_block(&mut tracker, height, chain_size, &block)
                .with_context(|| format!("driving block {} from {}", height, path.display()))?;
            height += 1;
            if control == BlockControl::Cutoff {
                break 'files;
            }
        }
    }
    info!("first pass (ingestion): {:.3}s", first_pass_start.elapsed().as_secs_f64());

    let second_pass_start = Instant::now();
    let integrity = tracker.integrity_check();
    info!("second pass (integrity check): {:.3}s", second_pass_start.elapsed().as_secs_f64());
    if !integrity.is_clean() {
        for hole in &integrity.holes {
            tracing::warn!("hole: [{}, {})", hole.prev_hi, hole.next_lo);
        }
        for overlap in &integrity.overlaps {
            tracing::error!("overlap: prev_hi={} next_lo={}", overlap.prev_hi, overlap.next_lo);
        }
    }

    let report = tracker.wrapup();

    let third_pass_start = Instant::now();
    if report.total_minted > 0 {
        let mut rng = rand::thread_rng();
        for _ in 0..LOOKUP_BENCHMARK_SAMPLES {
            let sat = rng.gen_range(0..report.total_minted);
            let _ = tracker.find(sat);
        }
    }
    info!(
        "third pass ({} random lookups): {:.3}s",
        LOOKUP_BENCHMARK_SAMPLES,
        third_pass_start.elapsed().as_secs_f64()
    );

    report::print_counts(&report);
    report::print_lookups(&tracker, &targets);

    Ok(())
}
