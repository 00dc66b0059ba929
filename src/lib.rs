//! This library provides textbook RSA signing and verification over SHA-256 message digests.
//!
//! A configuration in this library, [`RSAConfig`], implements the RSA relations on plain big
//! integers: hashing a message to a digest integer `h`, the modular power `h^d mod n` that
//! produces a signature, and the modular power `sig^e mod n` that recovers the digest for the
//! final equality check. Key generation is delegated to the [`rsa`] crate and fixes the public
//! exponent to the conventional `65537`; modular exponentiation is delegated to
//! [`num_bigint::BigUint::modpow`].
//!
//! Textbook RSA signs the bare digest integer with no padding scheme. That keeps the
//! demonstration close to the mathematics but is malleable and must not be confused with a
//! production signature scheme such as PKCS#1 v1.5 or PSS.

pub mod big_uint;
pub mod errors;

pub use big_uint::*;

use num_bigint::BigUint;

mod config;
mod instructions;
pub use config::*;
pub use instructions::*;

/// RSA public key, the pair of a modulus `n` and a public exponent `e`.
#[derive(Clone, Debug)]
pub struct RSAPublicKey {
    /// a modulus parameter
    pub n: BigUint,
    /// an exponent parameter
    pub e: BigUint,
}

impl RSAPublicKey {
    /// Creates new [`RSAPublicKey`] from `n` and `e`.
    ///
    /// # Arguments
    /// * n - an integer of `n`.
    /// * e - an integer of `e`.
    ///
    /// # Return values
    /// Returns new [`RSAPublicKey`].
    pub fn new(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }
}

/// RSA private key holding the modulus `n`, the public exponent `e`, and the private exponent
/// `d`.
///
/// The key pair produced by [`RSAInstructions::generate_keypair`] lives here; the public half is
/// derived with [`RSAPrivateKey::to_public_key`].
#[derive(Clone, Debug)]
pub struct RSAPrivateKey {
    n: BigUint,
    e: BigUint,
    d: BigUint,
}

impl RSAPrivateKey {
    /// Creates new [`RSAPrivateKey`] from `n`, `e`, and `d`.
    ///
    /// # Arguments
    /// * n - an integer of `n`.
    /// * e - an integer of `e`.
    /// * d - an integer of `d`.
    ///
    /// # Return values
    /// Returns new [`RSAPrivateKey`].
    pub fn new(n: BigUint, e: BigUint, d: BigUint) -> Self {
        Self { n, e, d }
    }

    /// Returns the modulus of the key.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Returns the public exponent of the key.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Returns the private exponent of the key.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Returns the public half of the key pair.
    pub fn to_public_key(&self) -> RSAPublicKey {
        RSAPublicKey::new(self.n.clone(), self.e.clone())
    }
}

/// RSA signature wrapping the integer `c = h^d mod n`.
#[derive(Clone, Debug)]
pub struct RSASignature {
    c: BigUint,
}

impl RSASignature {
    /// Creates new [`RSASignature`] from its integer.
    ///
    /// # Arguments
    /// * c - an integer of the signature.
    ///
    /// # Return values
    /// Returns new [`RSASignature`].
    pub fn new(c: BigUint) -> Self {
        Self { c }
    }

    /// Returns the signature integer `c`.
    pub fn c(&self) -> &BigUint {
        &self.c
    }
}
