//! Payload encoding and decoding
//!
//! Compresses a byte buffer into a count-prefixed bitstream using the
//! per-symbol codes derived from a Huffman tree, and decompresses such a
//! bitstream back into bytes by walking the tree.
//!
//! The wire layout is a fixed-width 32-bit little-endian count of encoded
//! symbols, written directly as bytes, followed by the bit-packed code
//! sequence zero-padded to a whole number of bytes.

use std::io::{Read, Write};

use crate::bits::{BitReader, BitWriter};
use crate::error::{HuffpackError, Result};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Encode `data` against `tree` and write the count-prefixed payload
/// stream into `sink`, returning the sink.
///
/// Every byte of `data` must have a leaf in the tree. For the degenerate
/// one-leaf tree each occurrence encodes to zero bits, so the payload
/// carries only the count field.
pub fn write_payload<W: Write>(mut sink: W, data: &[u8], tree: &HuffmanTree) -> Result<W> {
    let count = u32::try_from(data.len())
        .map_err(|_| HuffpackError::invalid_data("input exceeds the 32-bit symbol count"))?;
    sink.write_all(&count.to_le_bytes())?;

    let codes = tree.codes();
    let mut writer = BitWriter::new(sink);
    for &byte in data {
        let code = codes.get(&byte).ok_or_else(|| {
            HuffpackError::invalid_data(format!("symbol {:#04x} has no code in the tree", byte))
        })?;
        for &bit in code {
            writer.write_bit(bit)?;
        }
    }
    writer.finish()
}

/// Encode `data` against `tree` into an in-memory payload stream
pub fn encode_to_vec(data: &[u8], tree: &HuffmanTree) -> Result<Vec<u8>> {
    write_payload(Vec::new(), data, tree)
}

/// Decode a count-prefixed payload stream from `source`, writing the
/// reconstructed bytes into `sink`. Returns the number of symbols
/// emitted.
///
/// A zero count decodes to nothing and needs no tree; any other count
/// without a tree is an [`HuffpackError::EmptyAlphabet`] error. Per
/// symbol the walk consumes one bit per branch from the root to a leaf;
/// a stream exhausted mid-walk supplies `0` filler bits, so the
/// count-bounded loop still terminates on malformed input instead of
/// failing.
pub fn read_payload<R: Read, W: Write>(
    mut source: R,
    sink: &mut W,
    tree: Option<&HuffmanTree>,
) -> Result<u64> {
    let mut count_bytes = [0u8; 4];
    source.read_exact(&mut count_bytes)?;
    let count = u32::from_le_bytes(count_bytes);

    if count == 0 {
        return Ok(0);
    }
    let tree = tree.ok_or(HuffpackError::EmptyAlphabet)?;

    let mut reader = BitReader::new(source);
    match tree.root() {
        HuffmanNode::Leaf { symbol, .. } => {
            // Degenerate one-leaf tree: the symbol is implied entirely by
            // the count, no bits are consumed.
            for _ in 0..count {
                sink.write_all(&[*symbol])?;
            }
        }
        root @ HuffmanNode::Internal { .. } => {
            for _ in 0..count {
                let mut node = root;
                while let HuffmanNode::Internal { left, right, .. } = node {
                    node = if reader.read_bit()? == 0 { left } else { right };
                }
                if let HuffmanNode::Leaf { symbol, .. } = node {
                    sink.write_all(&[*symbol])?;
                }
            }
        }
    }
    Ok(count as u64)
}

/// Decode an in-memory payload stream into a byte vector
pub fn decode_to_vec(payload: &[u8], tree: Option<&HuffmanTree>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    read_payload(payload, &mut out, tree)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn tree_for(data: &[u8]) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::from_bytes(data)).unwrap()
    }

    #[test]
    fn test_two_symbol_payload_bytes() {
        // Codes over {a:1, b:2}: a = 0, b = 1. "abb" is the count 3 then
        // the bits 011 padded out.
        let tree = tree_for(b"abb");
        let payload = encode_to_vec(b"abb", &tree).unwrap();
        assert_eq!(payload, vec![3, 0, 0, 0, 0b0110_0000]);
    }

    #[test]
    fn test_degenerate_payload_is_count_only() {
        let data = vec![b'a'; 1000];
        let tree = tree_for(&data);
        let payload = encode_to_vec(&data, &tree).unwrap();
        assert_eq!(payload, vec![0xE8, 0x03, 0, 0]);

        let decoded = decode_to_vec(&payload, Some(&tree)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_round_trip_text() {
        let data = b"this is an example of a huffman tree".to_vec();
        let tree = tree_for(&data);
        let payload = encode_to_vec(&data, &tree).unwrap();
        assert!(payload.len() < data.len() + 4);
        let decoded = decode_to_vec(&payload, Some(&tree)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_round_trip_every_byte_value() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let tree = tree_for(&data);
        let decoded = decode_to_vec(&encode_to_vec(&data, &tree).unwrap(), Some(&tree)).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_zero_count_needs_no_tree() {
        let payload = [0u8, 0, 0, 0];
        let decoded = decode_to_vec(&payload, None).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_nonzero_count_without_tree_is_empty_alphabet() {
        let payload = [5u8, 0, 0, 0];
        let err = decode_to_vec(&payload, None).unwrap_err();
        assert!(matches!(err, HuffpackError::EmptyAlphabet));
    }

    #[test]
    fn test_symbol_outside_tree_is_invalid_data() {
        let tree = tree_for(b"aaabbb");
        let err = encode_to_vec(b"abc", &tree).unwrap_err();
        assert!(matches!(err, HuffpackError::InvalidData { .. }));
    }

    #[test]
    fn test_truncated_payload_decodes_with_filler_bits() {
        // Count says 8 symbols but the bit section is cut short: the
        // decoder substitutes zero bits and still emits exactly 8 symbols.
        let data = b"aaabbbcc".to_vec();
        let tree = tree_for(&data);
        let full = encode_to_vec(&data, &tree).unwrap();
        let cut = &full[..4];

        let decoded = decode_to_vec(cut, Some(&tree)).unwrap();
        assert_eq!(decoded.len(), 8);
    }

    #[test]
    fn test_count_field_is_little_endian() {
        let data = vec![b'x'; 0x0102];
        let tree = tree_for(&data);
        let payload = encode_to_vec(&data, &tree).unwrap();
        assert_eq!(&payload[..4], &[0x02, 0x01, 0x00, 0x00]);
    }
}
