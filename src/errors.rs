//! Error types of this crate.

use thiserror::Error;

/// Alias of the `Result` type with the error type of this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while generating a key pair or computing a modular power.
#[derive(Debug, Error)]
pub enum Error {
    /// Key generation inside the underlying RSA library failed.
    #[error("rsa key generation failed: {0}")]
    KeyGeneration(#[from] rsa::errors::Error),
    /// A modular power was requested for a base that is not reduced modulo `n`.
    #[error("a {integer_bits}-bit integer is not below the {modulus_bits}-bit modulus")]
    IntegerOutOfRange {
        /// bit length of the offending integer
        integer_bits: u64,
        /// bit length of the modulus
        modulus_bits: u64,
    },
}
