use hmac::{Hmac, Mac};
use sha2::{Digest, Sha512};

use crate::errors::Result;

#[inline]
pub(crate) fn xor(a: &mut [u8], b: &[u8]) {
    for (a_byte, b_byte) in a.iter_mut().zip(b.iter()) {
        *a_byte ^= *b_byte;
    }
}

/// PBKDF2 with HMAC-SHA512 as the PRF, filling `output` completely.
///
/// The salt is the concatenation of `salt` parts, fed to the MAC in order so
/// callers can prefix it without allocating.
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[&[u8]],
    rounds: u32,
    output: &mut [u8],
) -> Result<()> {
    let prf = Hmac::<Sha512>::new_from_slice(password)?;
    let h_len = <Sha512 as Digest>::output_size();

    for (i, chunk) in output.chunks_mut(h_len).enumerate() {
        let i_be = ((i + 1) as u32).to_be_bytes();

        let mut mac = prf.clone();
        for part in salt {
            mac.update(part);
        }
        mac.update(&i_be);
        let mut u = mac.finalize().into_bytes();

        chunk.copy_from_slice(&u[..chunk.len()]);

        for _ in 1..rounds {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            xor(chunk, &u);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests_pbkdf2 {
    use super::*;

    fn derive<const N: usize>(password: &[u8], salt: &[&[u8]], rounds: u32) -> [u8; N] {
        let mut out = [0u8; N];
        pbkdf2_hmac_sha512(password, salt, rounds, &mut out).unwrap();
        out
    }

    #[test]
    fn test_xor() {
        let mut a1 = [0b10101010, 0b11001100];
        let b1 = [0b11110000, 0b00110011];
        let expected1 = [0b01011010, 0b11111111];
        xor(&mut a1, &b1);
        assert_eq!(a1, expected1);

        let mut a2 = [1, 2, 3, 4];
        let b2 = [0, 0, 0, 0];
        let expected2 = [1, 2, 3, 4];
        xor(&mut a2, &b2);
        assert_eq!(a2, expected2);

        let mut a3 = [0xDE, 0xAD, 0xBE, 0xEF];
        let b3 = a3.clone();
        let expected3 = [0, 0, 0, 0];
        xor(&mut a3, &b3);
        assert_eq!(a3, expected3);
    }

    #[test]
    fn test_known_answer() {
        let out: [u8; 64] = derive(b"password", &[b"salt"], 1);
        assert_eq!(
            hex::encode(out),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
             c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );

        let out: [u8; 64] = derive(b"password", &[b"salt"], 2);
        assert_eq!(
            hex::encode(out),
            "e1d9c16aa681708a45f5c7c4e215ceb66e011a2e9f0040713f18aefdb866d53c\
             f76cab2868a39b9f7840edce4fef5a82be67335c77a6068e04112754f27ccf4e"
        );
    }

    #[test]
    fn test_salt_parts_concatenate() {
        let joined: [u8; 32] = derive(b"key", &[b"mnemonicpass"], 16);
        let split: [u8; 32] = derive(b"key", &[b"mnemonic", b"", b"pass"], 16);
        assert_eq!(joined, split);
    }

    #[test]
    fn test_truncated_output_is_prefix() {
        let long: [u8; 64] = derive(b"key", &[b"salt"], 8);
        let short: [u8; 20] = derive(b"key", &[b"salt"], 8);
        assert_eq!(&long[..20], &short[..]);
    }

    #[test]
    fn test_multi_block_output() {
        let long: [u8; 100] = derive(b"key", &[b"salt"], 3);
        let first: [u8; 64] = derive(b"key", &[b"salt"], 3);
        assert_eq!(&long[..64], &first[..]);
        assert_ne!(&long[64..], &first[..36]);
    }
}
