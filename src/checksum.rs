use sha2::{Digest, Sha256};

use crate::{bits::BitString, strength::BYTE_BITS};

/// First `size` bits of `SHA-256(entropy)`. `size` is at most 8.
pub fn checksum(entropy: &[u8], size: usize) -> BitString {
    let size = size.min(BYTE_BITS);
    let hash = Sha256::digest(entropy);
    let mut bits = BitString::with_capacity(size);
    bits.push_bits(u32::from(hash[0]) >> (BYTE_BITS - size), size);
    bits
}
