//! Command-line surface (§6). Only `--at-block` is part of the distilled
//! spec; `--blocks-dir` and the target-file paths exist because something
//! has to tell the binary where its input lives.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dump first-to-spend satoshi ranges of UTXOs", long_about = None)]
pub struct Args {
    /// Only take into account transactions in blocks strictly older than
    /// `<N>`. Default: `-1`, meaning "process all blocks".
    #[arg(short = 'a', long = "at-block", default_value_t = -1)]
    pub at_block: i64,

    /// Directory containing `blkNNNNN.dat` files, read in file-name order.
    #[arg(short = 'b', long = "blocks-dir")]
    pub blocks_dir: PathBuf,

    /// Whitespace-separated decimal satoshi identities to look up after ingestion.
    #[arg(long = "target-file", default_value = "fts.target")]
    pub target_file: PathBuf,

    /// Whitespace-separated decimal satoshi identities to trace during processing.
    #[arg(long = "debug-target-file", default_value = "fts.debug.target")]
    pub debug_target_file: PathBuf,
}

impl Args {
    /// The cutoff height, if any. `-1` (or any negative value) means "no cutoff".
    pub fn cutoff_block(&self) -> Option<u64> {
        if self.at_block < 0 {
            None
        } else {
            Some(self.at_block as u64)
        }
    }
}
