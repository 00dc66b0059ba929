//! Plain big-unsigned-integer helpers shared by the RSA operations and their tests.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Given a base `a`, an exponent `b`, and a modulus `n`, performs the modular power `a^b mod n`.
pub fn big_pow_mod(a: &BigUint, b: &BigUint, n: &BigUint) -> BigUint {
    a.modpow(b, n)
}

/// Computes the Carmichael function `λ(n) = lcm(p - 1, q - 1)` of a two-prime modulus `n = p*q`.
pub fn carmichael_lambda(p: &BigUint, q: &BigUint) -> BigUint {
    (p - BigUint::one()).lcm(&(q - BigUint::one()))
}

/// Converts an integer of the key generator's bignum type into a [`BigUint`].
///
/// The `rsa` crate carries its key components as `num-bigint-dig` integers; the rest of this
/// crate computes over `num-bigint`, so the components cross over once, by bytes, at key
/// construction.
pub fn biguint_from_dig(value: &rsa::BigUint) -> BigUint {
    BigUint::from_bytes_be(&value.to_bytes_be())
}
