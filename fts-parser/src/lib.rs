//! External collaborator that `fts-cli` drives: decodes Bitcoin Core block
//! files sequentially and turns each block into calls against
//! `fts_core::BlockEvents`. Hashing and byte-level decoding live here, never
//! in `fts-core` (SPEC_FULL.md §1).

pub mod drive;
pub mod reader;

pub use drive::drive_block;
pub use reader::{block_files, BlockFileReader, MAINNET_MAGIC};
