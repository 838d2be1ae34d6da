//! Whole-run compression and decompression
//!
//! Ties the frequency pass, tree construction, and the two codecs
//! together into the file-level operations the command surface exposes:
//! one compression run produces a count-prefixed payload stream and a
//! separate coding-table stream, and a decompression run consumes both to
//! reconstruct the original bytes.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bits::{BitReader, BitWriter};
use crate::error::{HuffpackError, Result};
use crate::freq::FrequencyTable;
use crate::payload::{decode_to_vec, encode_to_vec, read_payload, write_payload};
use crate::table::{read_coding_table, write_coding_table};
use crate::tree::HuffmanTree;

/// Default output name for the compressed payload stream
pub const DEFAULT_PAYLOAD_NAME: &str = "compressed.bits";
/// Default output name for the coding-table stream
pub const DEFAULT_TABLE_NAME: &str = "coding_table.bits";

/// Statistics for one compression run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Original size in bytes
    pub input_bytes: u64,
    /// Size of the payload stream, including the 4-byte count field
    pub payload_bytes: u64,
    /// Size of the coding-table stream
    pub table_bytes: u64,
    /// Total output over input (0.0 for empty input)
    pub compression_ratio: f64,
    /// Payload bits spent per input symbol (0.0 for empty input)
    pub bits_per_symbol: f64,
}

impl CompressionStats {
    /// Compute statistics from the three stream sizes
    pub fn new(input_bytes: u64, payload_bytes: u64, table_bytes: u64) -> Self {
        let compression_ratio = if input_bytes > 0 {
            (payload_bytes + table_bytes) as f64 / input_bytes as f64
        } else {
            0.0
        };
        let bits_per_symbol = if input_bytes > 0 {
            (payload_bytes.saturating_sub(4) * 8) as f64 / input_bytes as f64
        } else {
            0.0
        };
        Self {
            input_bytes,
            payload_bytes,
            table_bytes,
            compression_ratio,
            bits_per_symbol,
        }
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| HuffpackError::source_unavailable(path, e))?;
    let mut data = Vec::new();
    BufReader::new(file).read_to_end(&mut data)?;
    Ok(data)
}

/// Compress the file at `input` into a payload stream at `payload_path`
/// and a coding-table stream at `table_path`.
///
/// Empty input still produces valid artifacts: a payload holding only a
/// zero count and an empty table stream.
pub fn compress<P, Q, R>(input: P, payload_path: Q, table_path: R) -> Result<CompressionStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let input = input.as_ref();
    let freqs = FrequencyTable::from_path(input)?;
    let data = read_source(input)?;
    let tree = HuffmanTree::build(&freqs);

    let payload_sink = BufWriter::new(File::create(payload_path.as_ref())?);
    let mut payload_sink = match &tree {
        Some(tree) => write_payload(payload_sink, &data, tree)?,
        None => {
            let mut sink = payload_sink;
            sink.write_all(&0u32.to_le_bytes())?;
            sink
        }
    };
    payload_sink.flush()?;

    let mut table_sink = BufWriter::new(File::create(table_path.as_ref())?);
    if let Some(tree) = &tree {
        let mut writer = BitWriter::new(table_sink);
        write_coding_table(tree.root(), &mut writer)?;
        table_sink = writer.finish()?;
    }
    table_sink.flush()?;

    let payload_bytes = std::fs::metadata(payload_path.as_ref())?.len();
    let table_bytes = std::fs::metadata(table_path.as_ref())?.len();
    Ok(CompressionStats::new(
        data.len() as u64,
        payload_bytes,
        table_bytes,
    ))
}

/// Reconstruct the original bytes from a payload stream and a
/// coding-table stream, writing them to `output_path`. Returns the
/// number of bytes written.
pub fn decompress<P, Q, R>(payload_path: P, table_path: Q, output_path: R) -> Result<u64>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let table_path = table_path.as_ref();
    let table_file =
        File::open(table_path).map_err(|e| HuffpackError::source_unavailable(table_path, e))?;
    let mut table_reader = BitReader::new(BufReader::new(table_file));
    let tree = read_coding_table(&mut table_reader)?;

    let payload_path = payload_path.as_ref();
    let payload_file =
        File::open(payload_path).map_err(|e| HuffpackError::source_unavailable(payload_path, e))?;

    let mut output = BufWriter::new(File::create(output_path.as_ref())?);
    let emitted = read_payload(BufReader::new(payload_file), &mut output, tree.as_ref())?;
    output.flush()?;
    Ok(emitted)
}

/// Compress an in-memory buffer, returning `(payload, table)` streams
pub fn compress_bytes(data: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let freqs = FrequencyTable::from_bytes(data);
    match HuffmanTree::build(&freqs) {
        Some(tree) => {
            let payload = encode_to_vec(data, &tree)?;
            let mut writer = BitWriter::new(Vec::new());
            write_coding_table(tree.root(), &mut writer)?;
            Ok((payload, writer.finish()?))
        }
        None => Ok((0u32.to_le_bytes().to_vec(), Vec::new())),
    }
}

/// Decompress in-memory `(payload, table)` streams back into bytes
pub fn decompress_bytes(payload: &[u8], table: &[u8]) -> Result<Vec<u8>> {
    let mut table_reader = BitReader::new(table);
    let tree = read_coding_table(&mut table_reader)?;
    decode_to_vec(payload, tree.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(data: &[u8]) -> Vec<u8> {
        let (payload, table) = compress_bytes(data).unwrap();
        decompress_bytes(&payload, &table).unwrap()
    }

    #[test]
    fn test_round_trip_empty() {
        assert_eq!(round_trip(b""), b"");
    }

    #[test]
    fn test_round_trip_single_byte() {
        assert_eq!(round_trip(b"q"), b"q");
    }

    #[test]
    fn test_round_trip_repeated_byte() {
        let data = vec![b'a'; 1000];
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn test_round_trip_mixed_binary() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
        assert_eq!(round_trip(&data), data);
    }

    #[test]
    fn test_empty_input_artifacts() {
        let (payload, table) = compress_bytes(b"").unwrap();
        assert_eq!(payload, vec![0, 0, 0, 0]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_skewed_input_compresses() {
        let mut data = vec![b'a'; 9000];
        data.extend_from_slice(&[b'b'; 900]);
        data.extend_from_slice(&[b'c'; 100]);
        let (payload, table) = compress_bytes(&data).unwrap();
        assert!(payload.len() + table.len() < data.len() / 4);
    }

    #[test]
    fn test_stats_ratios() {
        let stats = CompressionStats::new(1000, 254, 10);
        assert_eq!(stats.input_bytes, 1000);
        assert!((stats.compression_ratio - 0.264).abs() < 1e-12);
        assert!((stats.bits_per_symbol - 2.0).abs() < 1e-12);

        let empty = CompressionStats::new(0, 4, 0);
        assert_eq!(empty.compression_ratio, 0.0);
        assert_eq!(empty.bits_per_symbol, 0.0);
    }
}
