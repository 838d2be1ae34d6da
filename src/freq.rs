//! Symbol frequency counting
//!
//! Counts occurrences of each of the 256 byte values in an input stream.
//! The resulting table is the sole input to Huffman tree construction.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{HuffpackError, Result};

/// Occurrence counts for every byte value 0–255.
///
/// All 256 slots always exist; unobserved symbols hold zero. The table is
/// computed once per input stream and is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Create an all-zero table
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count symbol occurrences in an in-memory byte slice
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Count symbol occurrences in the stream at `path`.
    ///
    /// Every byte 0–255 is a valid symbol; the stream is read raw, never
    /// text-decoded. An empty stream yields an all-zero table. A stream
    /// that cannot be opened yields [`HuffpackError::SourceUnavailable`]
    /// carrying the underlying system error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| HuffpackError::source_unavailable(path, e))?;
        let mut reader = BufReader::new(file);

        let mut table = Self::new();
        let mut buf = [0u8; 8192];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            for &byte in &buf[..n] {
                table.counts[byte as usize] += 1;
            }
        }
        Ok(table)
    }

    /// Occurrence count for `symbol`
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of symbols counted
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a nonzero count
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Whether no symbols were counted at all
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over `(symbol, count)` pairs with nonzero counts, in
    /// ascending symbol order
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
