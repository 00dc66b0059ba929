//! Signs a fixed message with a freshly generated RSA key pair and checks the signature.
//!
//! Set `RUST_LOG=debug` to watch the key generation steps.

use anyhow::Result;
use rand::rngs::OsRng;

use textbook_rsa::{RSAConfig, RSAInstructions};

/// The bit length of the generated modulus.
const KEY_BITS: usize = 1024;
/// The message to sign.
const MESSAGE: &[u8] = b"Hello, Bob!";

fn main() -> Result<()> {
    env_logger::init();
    let config = RSAConfig::construct(KEY_BITS);

    // Generate a key pair and print both halves.
    let private_key = config.generate_keypair(&mut OsRng)?;
    let public_key = private_key.to_public_key();
    println!("Public key: (n={}, e={})", public_key.n, public_key.e);
    println!("Private key: (n={}, d={})", private_key.n(), private_key.d());

    // Hash the message down to an integer below the modulus.
    let digest = config.hash_message(MESSAGE);
    println!("Hash: {}", digest);

    // Sign the digest, then recover it from the signature with the public key.
    let signature = config.sign_digest(&digest, &private_key)?;
    let recovered = config.modpow_public_key(signature.c(), &public_key)?;
    println!("Hash from Signature: {}", recovered);

    let valid = config.verify_digest_signature(&digest, &signature, &public_key);
    println!("Signature valid: {}", valid);
    Ok(())
}
