use alloc::string::String;
use hmac::digest::InvalidLength;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, NomnemonicError>;

#[derive(Debug, Error, PartialEq)]
pub enum NomnemonicError {
    #[error("bip39 is based on 2048 words, got {0}")]
    WordlistSize(usize),

    #[error("identifier must be at least {0} chars")]
    IdentifierTooShort(usize),

    #[error("password must be at least {0} chars")]
    PasswordTooShort(usize),

    #[error("passcode must be {0} digits")]
    PasscodeWrongLength(usize),

    #[error("passcode must be numeric but given '{0}'")]
    PasscodeNotNumeric(String),

    #[error("unsupported strength: {0}")]
    UnsupportedStrength(usize),

    #[error("unrecognized word {0}")]
    UnrecognizedWord(String),

    #[error("invalid checksum")]
    InvalidChecksum,

    #[error("invalid scrypt parameters")]
    InvalidKdfParams,

    #[error("HMAC key error: {0}")]
    HmacError(InvalidLength),
}

impl From<InvalidLength> for NomnemonicError {
    fn from(error: InvalidLength) -> Self {
        NomnemonicError::HmacError(error)
    }
}
