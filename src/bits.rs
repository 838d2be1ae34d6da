//! Bit-level stream cursors
//!
//! This module provides the bit-oriented reader and writer used by the
//! coding-table and payload codecs. Both cursors treat the underlying byte
//! stream as an ordered bit sequence, most significant bit first within
//! each byte.

use std::io::{self, Read, Write};

use crate::error::Result;

/// Mask covering the low `count` bits of a byte.
#[inline]
fn low_bits(count: u8) -> u8 {
    debug_assert!(count <= 8);
    ((1u16 << count) - 1) as u8
}

/// Writes an ordered bit sequence into a byte-oriented sink.
///
/// Bits accumulate into a partial output byte from the most significant
/// position down; each completed byte is written through immediately. The
/// final partial byte is zero-padded when the writer is finished.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    current: u8,
    /// Unused bit positions remaining in `current`, always 1..=8.
    bits_free: u8,
}

impl<W: Write> BitWriter<W> {
    /// Create a bit writer over the given byte sink
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            current: 0,
            bits_free: 8,
        }
    }

    /// Write the least significant `count` bits of `bits`, most
    /// significant of those bits first. `count` must be at most 8.
    pub fn write_bits(&mut self, bits: u8, count: u8) -> Result<()> {
        debug_assert!(count <= 8);
        if count == 0 {
            return Ok(());
        }

        if count <= self.bits_free {
            let bits = bits & low_bits(count);
            self.current |= bits << (self.bits_free - count);
            self.bits_free -= count;
            if self.bits_free == 0 {
                self.emit()?;
            }
        } else {
            // Split across the byte boundary: head fills the current byte,
            // tail starts the next one.
            let spill = count - self.bits_free;
            let head = (bits >> spill) & low_bits(self.bits_free);
            self.current |= head;
            self.emit()?;

            let tail = bits & low_bits(spill);
            self.current |= tail << (8 - spill);
            self.bits_free = 8 - spill;
        }

        Ok(())
    }

    /// Write a single bit
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write_bits(bit as u8, 1)
    }

    /// Number of bits pending in the partial output byte
    pub fn pending_bits(&self) -> u8 {
        8 - self.bits_free
    }

    /// Zero-pad the partial byte to a whole byte, flush the sink, and
    /// return it.
    pub fn finish(mut self) -> Result<W> {
        if self.bits_free < 8 {
            self.emit()?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn emit(&mut self) -> Result<()> {
        self.inner.write_all(&[self.current])?;
        self.current = 0;
        self.bits_free = 8;
        Ok(())
    }
}

/// Reads an ordered bit sequence from a byte-oriented source.
///
/// Bits are consumed most significant first within each byte. Once the
/// source reaches end-of-stream the reader is exhausted: further reads
/// yield neutral `0` filler bits instead of failing, and
/// [`is_exhausted`](BitReader::is_exhausted) reports the condition.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    inner: R,
    current: u8,
    /// Unread bits remaining in `current`.
    remaining: u8,
    exhausted: bool,
}

impl<R: Read> BitReader<R> {
    /// Create a bit reader over the given byte source
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            current: 0,
            remaining: 0,
            exhausted: false,
        }
    }

    /// Read a single bit, or a `0` filler bit once the source is exhausted
    pub fn read_bit(&mut self) -> Result<u8> {
        if self.exhausted {
            return Ok(0);
        }

        if self.remaining == 0 {
            let mut byte = [0u8; 1];
            loop {
                match self.inner.read(&mut byte) {
                    Ok(0) => {
                        self.exhausted = true;
                        return Ok(0);
                    }
                    Ok(_) => {
                        self.current = byte[0];
                        self.remaining = 8;
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            }
        }

        self.remaining -= 1;
        Ok((self.current >> self.remaining) & 1)
    }

    /// Read `count` bits, most significant first, into the low bits of the
    /// returned byte. `count` must be at most 8. Exhaustion mid-read fills
    /// the remaining positions with `0`.
    pub fn read_bits(&mut self, count: u8) -> Result<u8> {
        debug_assert!(count <= 8);
        let mut bits = 0u8;
        for _ in 0..count {
            bits = (bits << 1) | self.read_bit()?;
        }
        Ok(bits)
    }

    /// Whether the underlying source has reached end-of-stream
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
