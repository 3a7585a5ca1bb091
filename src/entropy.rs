//! Entropy derivation from an identifier, a password and a numeric passcode.
//!
//! Two independent streams are derived from the same message and salt, one
//! with PBKDF2-HMAC-SHA512 and one with scrypt, and XORed together. Inputs
//! are validated in order and the first violation is returned.

use alloc::{format, vec, vec::Vec};
use log::{debug, trace};
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::{
    errors::{NomnemonicError, Result},
    pbkdf2::{pbkdf2_hmac_sha512, xor},
    strength::{strength_for_word_count, validate_strength, BYTE_BITS},
};

pub const MIN_IDENTIFIER_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 12;
pub const PASSCODE_LEN: usize = 6;

const SALT_PREFIX_PASSWORD: &str = "pwd";
const SALT_PREFIX_PASSCODE: &str = "code";

/// Cost parameters of the two key derivation functions.
///
/// Defaults are the values the mnemonic vectors are derived with; any other
/// value yields different mnemonics for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// PBKDF2-HMAC-SHA512 iteration count.
    pub pbkdf2_rounds: u32,
    /// scrypt cost as a power of two, N = 2^log_n.
    pub scrypt_log_n: u8,
    /// scrypt block size.
    pub scrypt_r: u32,
    /// scrypt parallelization.
    pub scrypt_p: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            pbkdf2_rounds: 1 << 18,
            scrypt_log_n: 18,
            scrypt_r: 8,
            scrypt_p: 1,
        }
    }
}

/// Checks the human inputs and returns the entropy strength in bits for
/// `word_count`.
pub fn validate_inputs(
    identifier: &str,
    password: &str,
    passcode: &str,
    word_count: usize,
) -> Result<usize> {
    if identifier.len() < MIN_IDENTIFIER_LEN {
        return Err(NomnemonicError::IdentifierTooShort(MIN_IDENTIFIER_LEN));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(NomnemonicError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if passcode.len() != PASSCODE_LEN {
        return Err(NomnemonicError::PasscodeWrongLength(PASSCODE_LEN));
    }
    if !passcode.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NomnemonicError::PasscodeNotNumeric(passcode.into()));
    }
    validate_strength(strength_for_word_count(word_count))
}

/// Derives `strength / 8` bytes of entropy for a `word_count` word mnemonic.
pub fn derive_entropy(
    identifier: &str,
    password: &str,
    passcode: &str,
    word_count: usize,
    params: &KdfParams,
) -> Result<Vec<u8>> {
    let strength = validate_inputs(identifier, password, passcode, word_count)?;
    let entropy_size = strength / BYTE_BITS;
    debug!("deriving {entropy_size} bytes of entropy for {word_count} words with {params:?}");

    let mut message = format!("{identifier}:{password}|{passcode}={word_count}").into_bytes();
    let mut salt = [
        SALT_PREFIX_PASSWORD.as_bytes(),
        password.as_bytes(),
        SALT_PREFIX_PASSCODE.as_bytes(),
        passcode.as_bytes(),
    ]
    .concat();

    let (head, tail) = derive_streams(&message, &salt, entropy_size, params);
    wipe(&mut message);
    wipe(&mut salt);

    let mut tail = tail?;
    let mut entropy = head?;
    xor(&mut entropy, &tail);
    wipe(&mut tail);

    Ok(entropy)
}

#[inline]
fn wipe(buf: &mut [u8]) {
    #[cfg(feature = "zeroize")]
    buf.zeroize();
    #[cfg(not(feature = "zeroize"))]
    let _ = buf;
}

#[cfg(feature = "std")]
fn derive_streams(
    message: &[u8],
    salt: &[u8],
    size: usize,
    params: &KdfParams,
) -> (Result<Vec<u8>>, Result<Vec<u8>>) {
    std::thread::scope(|scope| {
        let tail = scope.spawn(|| scrypt_stream(message, salt, size, params));
        let head = pbkdf2_stream(message, salt, size, params);
        let tail = tail
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        (head, tail)
    })
}

#[cfg(not(feature = "std"))]
fn derive_streams(
    message: &[u8],
    salt: &[u8],
    size: usize,
    params: &KdfParams,
) -> (Result<Vec<u8>>, Result<Vec<u8>>) {
    (
        pbkdf2_stream(message, salt, size, params),
        scrypt_stream(message, salt, size, params),
    )
}

fn pbkdf2_stream(message: &[u8], salt: &[u8], size: usize, params: &KdfParams) -> Result<Vec<u8>> {
    let mut out = vec![0u8; size];
    pbkdf2_hmac_sha512(message, &[salt], params.pbkdf2_rounds, &mut out)?;
    trace!("pbkdf2 stream done");
    Ok(out)
}

fn scrypt_stream(message: &[u8], salt: &[u8], size: usize, params: &KdfParams) -> Result<Vec<u8>> {
    let scrypt_params =
        scrypt::Params::new(params.scrypt_log_n, params.scrypt_r, params.scrypt_p, size)
            .map_err(|_| NomnemonicError::InvalidKdfParams)?;
    let mut out = vec![0u8; size];
    scrypt::scrypt(message, salt, &scrypt_params, &mut out)
        .map_err(|_| NomnemonicError::InvalidKdfParams)?;
    trace!("scrypt stream done");
    Ok(out)
}
