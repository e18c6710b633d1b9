//! # fts-core
//!
//! The satoshi-range ledger at the heart of a first-to-spend (FTS) tracker:
//! for every live UTXO, the contiguous ranges of satoshi identities it holds,
//! plus an inverse index answering "which UTXO currently owns satoshi `s`?"
//!
//! This crate only consumes a block/transaction event stream (see
//! [`events::BlockEvents`]); it never parses bytes or computes a hash itself.
//! The `fts-parser` crate is the external collaborator that does that, and
//! `fts-cli` wires the two together with a command line and a stdout report.

pub mod error;
pub mod events;
pub mod forward_map;
pub mod integrity;
pub mod inverse_map;
pub mod outpoint;
pub mod range;
pub mod subsidy;
pub mod tracker;
pub mod tx_processor;

pub use error::{FtsError, Result};
pub use events::{BlockControl, BlockEvents};
pub use integrity::{Hole, IntegrityReport, Overlap};
pub use outpoint::{Outpoint, COINBASE_SINK_INDEX};
pub use range::SatoshiRange;
pub use subsidy::{FlatSubsidy, HalvingSubsidy, SubsidySchedule};
pub use tracker::{Tracker, TrackerConfig, WrapupReport};
