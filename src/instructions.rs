use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::errors::Result;
use crate::{RSAPrivateKey, RSAPublicKey, RSASignature};

/// Instructions for textbook RSA operations.
pub trait RSAInstructions {
    /// Generates a fresh RSA key pair whose modulus has the configured bit length.
    fn generate_keypair<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<RSAPrivateKey>;

    /// Hashes `msg` with SHA-256 and returns the digest as a big-endian integer.
    fn hash_message(&self, msg: &[u8]) -> BigUint;

    /// Given a base `x` and a RSA public key `(n, e)`, performs the modular power `x^e mod n`.
    fn modpow_public_key(&self, x: &BigUint, public_key: &RSAPublicKey) -> Result<BigUint>;

    /// Given a base `x` and a RSA private key `(n, d)`, performs the modular power `x^d mod n`.
    fn modpow_private_key(&self, x: &BigUint, private_key: &RSAPrivateKey) -> Result<BigUint>;

    /// Signs a message digest with the private key.
    fn sign_digest(&self, digest: &BigUint, private_key: &RSAPrivateKey) -> Result<RSASignature>;

    /// Verifies a signature over a message digest with the public key.
    fn verify_digest_signature(
        &self,
        digest: &BigUint,
        signature: &RSASignature,
        public_key: &RSAPublicKey,
    ) -> bool;
}
