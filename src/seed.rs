use crate::{errors::Result, pbkdf2::pbkdf2_hmac_sha512};

pub const SEED_BYTE_LEN: usize = 64;
pub const SEED32_BYTE_LEN: usize = 32;

const SALT_PREFIX: &str = "mnemonic";
const SEED_ROUNDS: u32 = 2048;
const SEED32_ROUNDS: u32 = 4096;

/// Stretches a sentence and passphrase into 64 bytes of seed material.
///
/// Any strings are accepted, the sentence is not checked against a
/// dictionary and the passphrase may be empty.
pub fn generate_seed(sentence: &str, passphrase: &str) -> Result<[u8; SEED_BYTE_LEN]> {
    let mut seed = [0u8; SEED_BYTE_LEN];
    pbkdf2_hmac_sha512(
        sentence.as_bytes(),
        &[SALT_PREFIX.as_bytes(), passphrase.as_bytes()],
        SEED_ROUNDS,
        &mut seed,
    )?;
    Ok(seed)
}

/// Like [`generate_seed`] with 4096 rounds and a 32 byte output.
pub fn generate_seed32(sentence: &str, passphrase: &str) -> Result<[u8; SEED32_BYTE_LEN]> {
    let mut seed = [0u8; SEED32_BYTE_LEN];
    pbkdf2_hmac_sha512(
        sentence.as_bytes(),
        &[SALT_PREFIX.as_bytes(), passphrase.as_bytes()],
        SEED32_ROUNDS,
        &mut seed,
    )?;
    Ok(seed)
}

#[cfg(test)]
mod tests_seed {
    use super::*;

    const SENTENCE: &str = "edge defense waste choose enrich upon flee junk siren film clown finish luggage leader kid quick brick print evidence swap drill paddle truly occur";

    #[test]
    fn test_generate_seed() {
        let cases = [
            ("", "7e74b1a8195ae1e8d06f29c9a306f678e5a8cf908075bc52eb3b716f9e50ce8860065c2c18b8a960bb363855d3a340074cba5db505d4f78dd1d94c4e19f20b7a"),
            ("some password", "0dc285fde768f7ff29b66ce7252d56ed92fe003b605907f7a4f683c3dc8586d34a914d3c71fc099bb38ee4a59e5b081a3497b7a323e90cc68f67b5837690310c"),
        ];
        for (passphrase, expected) in cases {
            let seed = generate_seed(SENTENCE, passphrase).unwrap();
            assert_eq!(hex::encode(seed), expected, "passphrase {passphrase:?}");
        }
    }

    #[test]
    fn test_generate_seed32() {
        let cases = [
            ("", "80eb719264248cf6d2fad85e42a00fcb09e0b85d2457d9f8185245da1c8bf9cf"),
            ("some password", "5aa339790b2964bf24f7da082fe4dde2e7cae30caf4cf454b2d5a3871633f564"),
        ];
        for (passphrase, expected) in cases {
            let seed = generate_seed32(SENTENCE, passphrase).unwrap();
            assert_eq!(hex::encode(seed), expected, "passphrase {passphrase:?}");
        }
    }

    #[test]
    fn test_arbitrary_input() {
        assert!(generate_seed("", "").is_ok());
        assert_ne!(
            generate_seed32("not a mnemonic", "").unwrap(),
            generate_seed32("not a mnemonic", " ").unwrap()
        );
    }
}
