//! # huffpack: byte-oriented Huffman compression
//!
//! This crate builds a prefix-free binary code from observed symbol
//! frequencies, serializes the code's tree structure into a compact
//! bitstream, and uses that tree to compress and losslessly decompress
//! arbitrary byte streams.
//!
//! ## Key Pieces
//!
//! - **Bit cursors**: [`BitWriter`] / [`BitReader`] turn a byte stream
//!   into an ordered bit sequence and back, most significant bit first
//! - **Frequency counting**: [`FrequencyTable`] counts all 256 byte
//!   values in an input stream
//! - **Tree construction**: [`HuffmanTree`] applies the stable greedy
//!   merge with a deterministic tie-break, so equal inputs always yield
//!   bit-identical output
//! - **Coding table**: [`table`] serializes the tree shape and leaf
//!   symbols with one bit of structure per node
//! - **Payload codec**: [`payload`] packs per-symbol codes behind a
//!   fixed-width symbol count
//! - **Codec facade**: [`codec`] produces and consumes the persisted
//!   payload/table artifact pair
//!
//! ## Quick Start
//!
//! ```rust
//! use huffpack::codec::{compress_bytes, decompress_bytes};
//!
//! let data = b"an example of a huffman tree";
//! let (payload, table) = compress_bytes(data)?;
//! let restored = decompress_bytes(&payload, &table)?;
//! assert_eq!(restored, data);
//! # Ok::<(), huffpack::HuffpackError>(())
//! ```

#![warn(missing_docs)]

pub mod bits;
pub mod codec;
pub mod error;
pub mod freq;
pub mod payload;
pub mod table;
pub mod tree;

// Re-export core types
pub use bits::{BitReader, BitWriter};
pub use codec::CompressionStats;
pub use error::{HuffpackError, Result};
pub use freq::FrequencyTable;
pub use tree::{HuffmanNode, HuffmanTree};
