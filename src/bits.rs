use alloc::vec::Vec;
use core::{fmt, ops::Range};

use crate::strength::BYTE_BITS;

/// Ordered bit sequence, packed MSB-first into bytes.
///
/// Bits past `len` in the last byte are always zero, so the packed bytes are
/// the left-justified, zero-padded byte form of the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitString {
    bytes: Vec<u8>,
    len: usize,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(BYTE_BITS)),
            len: 0,
        }
    }

    /// Expands every byte into 8 bits, most significant first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * BYTE_BITS,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit at `index`. Panics when out of range, like slice indexing.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {index} out of range {}", self.len);
        self.bytes[index / BYTE_BITS] & (0x80 >> (index % BYTE_BITS)) != 0
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len % BYTE_BITS;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len += 1;
    }

    /// Appends the low `width` bits of `value`, most significant first.
    pub fn push_bits(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32);
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    pub fn extend(&mut self, other: &BitString) {
        if self.len % BYTE_BITS == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        for i in 0..other.len {
            self.push(other.get(i));
        }
    }

    /// Reads `width` bits starting at `start` as an unsigned big-endian integer.
    pub fn read(&self, start: usize, width: usize) -> u32 {
        debug_assert!(width <= 32);
        (start..start + width).fold(0u32, |acc, i| (acc << 1) | u32::from(self.get(i)))
    }

    pub fn slice(&self, range: Range<usize>) -> BitString {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "bit range {range:?} out of range {}",
            self.len
        );
        let mut out = BitString::with_capacity(range.len());
        for i in range {
            out.push(self.get(i));
        }
        out
    }

    /// Splits into consecutive `width`-bit integers. A trailing group shorter
    /// than `width` is dropped.
    pub fn chunks(&self, width: usize) -> impl Iterator<Item = u32> + '_ {
        (0..self.len / width).map(move |i| self.read(i * width, width))
    }

    /// Packs the bits into `ceil(len / 8)` bytes. A final partial group
    /// occupies the most significant bits of the last byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.len {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
