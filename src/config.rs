use log::debug;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use rsa::PublicKeyParts;
use sha2::{Digest, Sha256};

use crate::big_uint::{big_pow_mod, biguint_from_dig};
use crate::errors::{Error, Result};
use crate::{RSAInstructions, RSAPrivateKey, RSAPublicKey, RSASignature};

/// Configuration for the textbook RSA operations.
#[derive(Clone, Debug)]
pub struct RSAConfig {
    /// The bit length of generated moduli.
    key_bits: usize,
}

impl RSAInstructions for RSAConfig {
    /// Generates a fresh RSA key pair.
    ///
    /// # Arguments
    /// * `rng` - a cryptographically secure random source.
    ///
    /// # Return values
    /// Returns a new [`RSAPrivateKey`] whose modulus has the configured bit length.
    ///
    /// Prime generation and the inversion of `e` modulo `λ(n)` are delegated to the `rsa`
    /// crate, which retries internally until the exponent is invertible; the generated key is
    /// additionally validated before its components are handed out.
    fn generate_keypair<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<RSAPrivateKey> {
        debug!("generating a {}-bit RSA key pair", self.key_bits);
        let key = rsa::RsaPrivateKey::new(rng, self.key_bits)?;
        key.validate()?;
        let n = biguint_from_dig(key.n());
        let e = biguint_from_dig(key.e());
        let d = biguint_from_dig(key.d());
        debug!("generated a modulus of {} bits", n.bits());
        Ok(RSAPrivateKey::new(n, e, d))
    }

    /// Hashes a message with SHA-256.
    ///
    /// # Arguments
    /// * `msg` - the message bytes.
    ///
    /// # Return values
    /// Returns the 32-byte digest reinterpreted as a big-endian integer `h`, `0 <= h < 2^256`.
    fn hash_message(&self, msg: &[u8]) -> BigUint {
        let mut hasher = Sha256::new();
        hasher.update(msg);
        BigUint::from_bytes_be(&hasher.finalize())
    }

    /// Given a base `x` and a RSA public key `(n, e)`, performs the modular power `x^e mod n`.
    ///
    /// # Arguments
    /// * `x` - a base integer, required to be below the modulus.
    /// * `public_key` - a RSA public key.
    ///
    /// # Return values
    /// Returns the modular power result `x^e mod n` as [`BigUint`].
    fn modpow_public_key(&self, x: &BigUint, public_key: &RSAPublicKey) -> Result<BigUint> {
        assert_in_modulus(x, &public_key.n)?;
        Ok(big_pow_mod(x, &public_key.e, &public_key.n))
    }

    /// Given a base `x` and a RSA private key `(n, d)`, performs the modular power `x^d mod n`.
    ///
    /// # Arguments
    /// * `x` - a base integer, required to be below the modulus.
    /// * `private_key` - a RSA private key.
    ///
    /// # Return values
    /// Returns the modular power result `x^d mod n` as [`BigUint`].
    fn modpow_private_key(&self, x: &BigUint, private_key: &RSAPrivateKey) -> Result<BigUint> {
        assert_in_modulus(x, private_key.n())?;
        Ok(big_pow_mod(x, private_key.d(), private_key.n()))
    }

    /// Given a message digest and a RSA private key, computes the signature `digest^d mod n`.
    ///
    /// # Arguments
    /// * `digest` - a message digest as an integer, required to be below the modulus.
    /// * `private_key` - a RSA private key.
    ///
    /// # Return values
    /// Returns a new [`RSASignature`].
    ///
    /// A digest that is not below the modulus has no meaningful signature and is rejected with
    /// [`Error::IntegerOutOfRange`]; with 256-bit digests the check can only fire for moduli
    /// shorter than 257 bits.
    fn sign_digest(&self, digest: &BigUint, private_key: &RSAPrivateKey) -> Result<RSASignature> {
        let c = self.modpow_private_key(digest, private_key)?;
        Ok(RSASignature::new(c))
    }

    /// Given a RSA public key, a message digest, and a signature, verifies the signature with
    /// the public key and the digest.
    ///
    /// # Arguments
    /// * `digest` - a message digest as an integer.
    /// * `signature` - a signature over the digest.
    /// * `public_key` - a RSA public key.
    ///
    /// # Return values
    /// Returns `true` if the digest recovered as `sig^e mod n` equals `digest`, and `false`
    /// otherwise. A signature that is not below the modulus is invalid rather than an error,
    /// and a digest that is not below the modulus can never equal the recovered value.
    fn verify_digest_signature(
        &self,
        digest: &BigUint,
        signature: &RSASignature,
        public_key: &RSAPublicKey,
    ) -> bool {
        if signature.c() >= &public_key.n {
            return false;
        }
        let recovered = big_pow_mod(signature.c(), &public_key.e, &public_key.n);
        recovered == *digest
    }
}

impl RSAConfig {
    /// Creates new [`RSAConfig`].
    ///
    /// # Arguments
    /// * key_bits - the bit length of generated moduli.
    ///
    /// # Return values
    /// Returns new [`RSAConfig`].
    pub fn construct(key_bits: usize) -> Self {
        Self { key_bits }
    }

    /// Getter for the bit length of generated moduli.
    pub fn key_bits(&self) -> usize {
        self.key_bits
    }
}

/// Checks that `x` is reduced modulo `n` before a modular power is taken.
fn assert_in_modulus(x: &BigUint, n: &BigUint) -> Result<()> {
    if x < n {
        Ok(())
    } else {
        Err(Error::IntegerOutOfRange {
            integer_bits: x.bits(),
            modulus_bits: n.bits(),
        })
    }
}
