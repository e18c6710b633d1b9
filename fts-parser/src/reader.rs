//! Sequential reader over Bitcoin Core-style `blkNNNNN.dat` files.
//!
//! This is deliberately the simplest thing that works: block/transaction
//! parsing is an external collaborator as far as the tracker is concerned
//! (SPEC_FULL.md §1), so there is no parallel pipeline here, no header-chain
//! reorg handling, and no XOR-obfuscated-file support — just "read blocks in
//! file order, in file-name order", which is exactly the order the tracker's
//! single-threaded event contract requires (§5).

use anyhow::{bail, Context, Result};
use bitcoin::consensus::Decodable;
use bitcoin::Block;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Bitcoin Core mainnet magic bytes, used to frame records within a blk file.
pub const MAINNET_MAGIC: [u8; 4] = [0xF9, 0xBE, 0xB4, 0xD9];

/// Returns the `blkNNNNN.dat` files under `dir`, sorted by file name so they
/// are visited in the same order Bitcoin Core wrote them.
pub fn block_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("reading blocks directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with("blk") && name.ends_with(".dat"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Reads blocks out of a single blk file, one magic-framed record at a time.
pub struct BlockFileReader<R> {
    reader: R,
    magic: [u8; 4],
}

impl BlockFileReader<BufReader<File>> {
    pub fn open(path: &Path, magic: [u8; 4]) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Ok(Self { reader: BufReader::new(file), magic })
    }
}

impl<R: Read> BlockFileReader<R> {
    /// Reads the next block, or `None` at a clean end-of-file.
    pub fn next_block(&mut self) -> Result<Option<Block>> {
        let mut magic = [0u8; 4];
        match self.reader.read_exact(&mut magic) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }
        if magic != self.magic {
            bail!(
                "bad block-file magic {:02x?}, expected {:02x?}",
                magic,
                self.magic
            );
        }

        let mut len_bytes = [0u8; 4];
        self.reader.read_exact(&mut len_bytes)?;
        let len = u32::from_le_bytes(len_bytes) as usize;

        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf)?;

        let block = Block::consensus_decode(&mut buf.as_slice())
            .context("decoding block payload")?;
        Ok(Some(block))
    }
}
