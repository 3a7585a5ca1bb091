use alloc::vec::Vec;
use log::debug;

use crate::{
    dictionary::Dictionary,
    entropy::{derive_entropy, KdfParams},
    errors::Result,
    mnemonic::Mnemonic,
    seed::{self, SEED32_BYTE_LEN, SEED_BYTE_LEN},
};

/// Deterministic mnemonic generator over a fixed dictionary.
///
/// The same identifier, password, passcode and word count always produce the
/// same mnemonic, so nothing has to be stored to recover it.
#[derive(Debug, Clone)]
pub struct Nomnemonic {
    dictionary: Dictionary,
    params: KdfParams,
}

impl Nomnemonic {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            params: KdfParams::default(),
        }
    }

    /// Generator over the bundled BIP39 English list.
    pub fn english() -> Result<Self> {
        Dictionary::english().map(Self::new)
    }

    /// Replaces the KDF cost parameters. Mnemonics derived with non-default
    /// parameters differ from the default ones for the same inputs.
    pub fn with_params(mut self, params: KdfParams) -> Self {
        self.params = params;
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    /// Derives a `word_count` word mnemonic. Word count must be 12, 15, 18,
    /// 21 or 24; the identifier at least 2 bytes, the password at least 12
    /// and the passcode exactly 6 ASCII digits.
    ///
    /// With default parameters this costs a 256 MiB scrypt run plus 2^18
    /// PBKDF2 rounds, bound concurrent calls accordingly.
    pub fn generate(
        &self,
        identifier: &str,
        password: &str,
        passcode: &str,
        word_count: usize,
    ) -> Result<Mnemonic<'_>> {
        let entropy = derive_entropy(identifier, password, passcode, word_count, &self.params)?;
        let mnemonic = Mnemonic::from_entropy(&self.dictionary, &entropy);
        debug!("generated {word_count} word mnemonic");
        mnemonic
    }

    /// Recovers the entropy encoded by `words`.
    pub fn calculate_entropy<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u8>> {
        Mnemonic::parse_words(&self.dictionary, words)?.to_entropy()
    }

    /// Malformed input (unsupported length, unknown word) is an error, a
    /// well formed mnemonic with a wrong checksum is `Ok(false)`.
    pub fn validate<S: AsRef<str>>(&self, words: &[S]) -> Result<bool> {
        let valid = Mnemonic::parse_words(&self.dictionary, words)?.has_valid_checksum();
        debug!("checksum of {} word mnemonic valid: {valid}", words.len());
        Ok(valid)
    }

    /// Whether `words` is a well formed mnemonic with a matching checksum.
    pub fn is_valid<S: AsRef<str>>(&self, words: &[S]) -> bool {
        self.validate(words).unwrap_or(false)
    }

    pub fn generate_seed(&self, sentence: &str, passphrase: &str) -> Result<[u8; SEED_BYTE_LEN]> {
        seed::generate_seed(sentence, passphrase)
    }

    pub fn generate_seed32(
        &self,
        sentence: &str,
        passphrase: &str,
    ) -> Result<[u8; SEED32_BYTE_LEN]> {
        seed::generate_seed32(sentence, passphrase)
    }
}
