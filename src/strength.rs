use crate::errors::{NomnemonicError, Result};

/// Bits per byte.
pub const BYTE_BITS: usize = 8;
/// Bits per BIP39 word index.
pub const WORD_BITS: usize = 11;
/// Entropy must be a multiple of this many bits; one checksum bit per chunk.
pub const ENTROPY_CHUNK_BITS: usize = 32;

pub const MAX_NB_WORDS: usize = 24;

/// Word count to entropy strength in bits.
const STRENGTHS: [(usize, usize); 5] = [(12, 128), (15, 160), (18, 192), (21, 224), (24, 256)];

/// Strength for a mnemonic of `word_count` words, or 0 when unsupported.
#[inline]
pub fn strength_for_word_count(word_count: usize) -> usize {
    STRENGTHS
        .iter()
        .find(|(words, _)| *words == word_count)
        .map_or(0, |(_, strength)| *strength)
}

#[inline]
pub fn word_count_for_strength(strength: usize) -> Option<usize> {
    STRENGTHS
        .iter()
        .find(|(_, bits)| *bits == strength)
        .map(|(words, _)| *words)
}

#[inline]
pub fn validate_strength(strength: usize) -> Result<usize> {
    if STRENGTHS.iter().any(|(_, bits)| *bits == strength) {
        Ok(strength)
    } else {
        Err(NomnemonicError::UnsupportedStrength(strength))
    }
}

#[inline]
pub fn checksum_size(strength: usize) -> usize {
    strength / ENTROPY_CHUNK_BITS
}
