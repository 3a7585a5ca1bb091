#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod bits;
pub mod checksum;
pub mod dictionary;
pub mod entropy;
pub mod errors;
pub mod mnemonic;
pub mod nomnemonic;
pub mod pbkdf2;
pub mod seed;
pub mod strength;

pub use crate::{
    dictionary::Dictionary,
    entropy::KdfParams,
    errors::{NomnemonicError, Result},
    mnemonic::Mnemonic,
    nomnemonic::Nomnemonic,
};

/// Version of the derivation scheme. Changes whenever the same inputs would
/// produce a different mnemonic.
pub const ALGORITHM_VERSION: &str = "3.0.0";
