//! Reads `fts.target` / `fts.debug.target`-style files: whitespace-separated
//! decimal satoshi identities. Per §7 error kind 4, a malformed file is never
//! an error — reading simply stops at the first non-numeric token, keeping
//! whatever parsed cleanly before it. A missing file yields an empty list;
//! both files are optional.

use std::fs;
use std::path::Path;

pub fn read_satoshi_list(path: &Path) -> Vec<u64> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    let mut satoshis = Vec::new();
    for token in contents.split_whitespace() {
        match token.parse::<u64>() {
            Ok(sat) => satoshis.push(sat),
            Err(_) => break,
        }
    }
    satoshis
}
