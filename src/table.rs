//! Coding-table serialization
//!
//! Serializes a Huffman tree's shape and leaf symbols into a bitstream
//! and reconstructs the tree from one. The stream is emitted depth-first,
//! left subtree then right subtree then the node's own tag: a leaf is the
//! bit `1` followed by its 8-bit symbol (most significant bit first), an
//! internal node is the single bit `0`. The root's tag is therefore the
//! last thing a well-formed stream carries; there is no length prefix or
//! end marker, the stream is framed by end-of-file.

use std::io::{Read, Write};

use crate::bits::{BitReader, BitWriter};
use crate::error::{HuffpackError, Result};
use crate::tree::{HuffmanNode, HuffmanTree};

/// Serialize the tree rooted at `node` into the bit writer.
///
/// The caller finishes the writer afterwards, zero-padding the stream to
/// a whole number of bytes.
pub fn write_coding_table<W: Write>(node: &HuffmanNode, writer: &mut BitWriter<W>) -> Result<()> {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            writer.write_bits(1, 1)?;
            writer.write_bits(*symbol, 8)?;
        }
        HuffmanNode::Internal { left, right, .. } => {
            write_coding_table(left, writer)?;
            write_coding_table(right, writer)?;
            writer.write_bits(0, 1)?;
        }
    }
    Ok(())
}

/// Reconstruct a tree from a coding-table bitstream.
///
/// A stack machine consumes one bit at a time: `1` pushes a leaf built
/// from the next 8 bits, `0` pops the two most recent subtrees (first
/// popped becomes the right child) and pushes their merge, unless the
/// stack holds exactly one entry, in which case that entry is the
/// completed root. End-of-stream with a single outstanding entry also
/// completes the root, which is how the degenerate single-leaf table
/// (leaf bit-pair with no trailing `0`) decodes. Reconstructed weights
/// are not meaningful and are stored as zero.
///
/// Returns `Ok(None)` for an empty stream (the empty-alphabet artifact)
/// and [`HuffpackError::TruncatedStream`] when the stream ends with two
/// or more unmerged subtrees outstanding.
pub fn read_coding_table<R: Read>(reader: &mut BitReader<R>) -> Result<Option<HuffmanTree>> {
    let mut stack: Vec<HuffmanNode> = Vec::new();

    while !reader.is_exhausted() {
        let bit = reader.read_bit()?;
        if bit == 1 {
            let symbol = reader.read_bits(8)?;
            stack.push(HuffmanNode::Leaf { symbol, weight: 0 });
        } else {
            // A real internal tag, or a zero filler bit at end-of-stream;
            // either way a lone stack entry is the finished root.
            if stack.len() == 1 {
                return Ok(stack.pop().map(HuffmanTree::from_root));
            }
            if reader.is_exhausted() {
                break;
            }
            let right = stack
                .pop()
                .ok_or_else(|| HuffpackError::truncated("coding table merges an empty stack"))?;
            let left = stack
                .pop()
                .ok_or_else(|| HuffpackError::truncated("coding table merges a single subtree"))?;
            stack.push(HuffmanNode::Internal {
                weight: 0,
                left: Box::new(left),
                right: Box::new(right),
            });
        }
    }

    match stack.len() {
        0 => Ok(None),
        1 => Ok(stack.pop().map(HuffmanTree::from_root)),
        outstanding => Err(HuffpackError::truncated(format!(
            "coding table ended with {} unmerged subtrees",
            outstanding
        ))),
    }
}
