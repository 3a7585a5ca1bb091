use alloc::{string::ToString, vec::Vec};
use core::fmt;

use crate::{
    bits::BitString,
    checksum::checksum,
    dictionary::Dictionary,
    errors::{NomnemonicError, Result},
    seed::{generate_seed, SEED_BYTE_LEN},
    strength::{
        checksum_size, strength_for_word_count, validate_strength, BYTE_BITS, MAX_NB_WORDS,
        WORD_BITS,
    },
};

/// A sequence of dictionary word indices whose trailing bits are the
/// checksum of the leading entropy bits.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Mnemonic<'a> {
    dictionary: &'a Dictionary,
    indicators: [u16; MAX_NB_WORDS],
    word_count: usize,
}

pub struct MnemonicIter<'a, 'b> {
    mnemonic: &'b Mnemonic<'a>,
    position: usize,
}

impl<'a, 'b> Iterator for MnemonicIter<'a, 'b> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.mnemonic.word_count {
            return None;
        }
        let word_index = self.mnemonic.indicators[self.position];
        self.position += 1;
        Some(self.mnemonic.dictionary.word_at(word_index))
    }
}

impl<'a> fmt::Display for Mnemonic<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl<'a> Mnemonic<'a> {
    pub fn iter<'b>(&'b self) -> MnemonicIter<'a, 'b> {
        MnemonicIter {
            mnemonic: self,
            position: 0,
        }
    }

    pub fn words(&self) -> Vec<&'a str> {
        self.iter().collect()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Entropy size in bits.
    pub fn strength(&self) -> usize {
        strength_for_word_count(self.word_count)
    }

    pub fn indices(&self) -> &[u16] {
        &self.indicators[..self.word_count]
    }

    /// Encodes 16, 20, 24, 28 or 32 bytes of entropy.
    ///
    /// All words but the last take 11 entropy bits each. The last word is
    /// the remaining entropy bits followed by the checksum bits.
    pub fn from_entropy(dictionary: &'a Dictionary, entropy: &[u8]) -> Result<Self> {
        let strength = validate_strength(entropy.len() * BYTE_BITS)?;
        let cs_size = checksum_size(strength);
        let word_count = (strength + cs_size) / WORD_BITS;
        let prefix_size = WORD_BITS - cs_size;

        let bits = BitString::from_bytes(entropy);
        let mut indicators = [0u16; MAX_NB_WORDS];
        let body = bits.slice(0..strength - prefix_size);
        for (i, idx) in body.chunks(WORD_BITS).enumerate() {
            indicators[i] = idx as u16;
        }

        let mut last = bits.slice(strength - prefix_size..strength);
        last.extend(&checksum(entropy, cs_size));
        indicators[word_count - 1] = last.read(0, WORD_BITS) as u16;

        Ok(Mnemonic {
            dictionary,
            indicators,
            word_count,
        })
    }

    /// Looks up every word. The word count is checked first, so an unknown
    /// word in a sentence of unsupported length reports the length.
    pub fn parse_words<S: AsRef<str>>(dictionary: &'a Dictionary, words: &[S]) -> Result<Self> {
        validate_strength(strength_for_word_count(words.len()))?;

        let mut indicators = [0u16; MAX_NB_WORDS];
        for (slot, word) in indicators.iter_mut().zip(words) {
            let word = word.as_ref();
            *slot = dictionary
                .index_of(word)
                .ok_or_else(|| NomnemonicError::UnrecognizedWord(word.into()))?;
        }

        Ok(Mnemonic {
            dictionary,
            indicators,
            word_count: words.len(),
        })
    }

    /// Splits `sentence` on whitespace and parses the words.
    pub fn parse_str(dictionary: &'a Dictionary, sentence: &str) -> Result<Self> {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        Self::parse_words(dictionary, &words[..])
    }

    /// All word indices as 11-bit groups, in order.
    pub fn to_bits(&self) -> BitString {
        let mut bits = BitString::with_capacity(self.word_count * WORD_BITS);
        for &idx in self.indices() {
            bits.push_bits(u32::from(idx), WORD_BITS);
        }
        bits
    }

    /// Entropy bytes with the stored and recomputed checksum bits.
    fn split(&self) -> (Vec<u8>, BitString, BitString) {
        let strength = self.strength();
        let bits = self.to_bits();
        let entropy = bits.slice(0..strength).to_bytes();
        let expected = checksum(&entropy, checksum_size(strength));
        let stored = bits.slice(strength..bits.len());
        (entropy, expected, stored)
    }

    pub fn has_valid_checksum(&self) -> bool {
        let (_, expected, stored) = self.split();
        expected == stored
    }

    /// Recovers the entropy, failing when the checksum does not match.
    pub fn to_entropy(&self) -> Result<Vec<u8>> {
        let (entropy, expected, stored) = self.split();
        if expected != stored {
            return Err(NomnemonicError::InvalidChecksum);
        }
        Ok(entropy)
    }

    pub fn to_seed(&self, passphrase: &str) -> Result<[u8; SEED_BYTE_LEN]> {
        generate_seed(&self.to_string(), passphrase)
    }
}
