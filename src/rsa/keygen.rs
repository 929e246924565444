// RSA Key Generation
// Derives a key pair from two caller-supplied primes

use num_bigint::BigUint;
use num_traits::One;

use crate::defaults::{FALLBACK_EXPONENT_START, PREFERRED_PUBLIC_EXPONENT};
use crate::error::{CipherError, CipherResult};
use crate::numtheory::{gcd, is_prime, mod_inverse};

/// RSA key pair material.
///
/// Holds both exponents plus the totient so the request layer can show the
/// full derivation. Computed fresh on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub n: BigUint,   // Modulus p * q
    pub e: BigUint,   // Public exponent
    pub d: BigUint,   // Private exponent
    pub phi: BigUint, // Euler totient (p-1)(q-1)
}

/// Generate an RSA key pair from two distinct primes.
///
/// Validates both inputs with `is_prime` and rejects p == q. The public
/// exponent is 65537 when coprime with phi, otherwise the first odd
/// candidate from 3 upward that is.
///
/// Returns `RsaKeyPair` on success.
pub fn generate_keys(p: &BigUint, q: &BigUint) -> CipherResult<RsaKeyPair> {
    // Step 1: Validate the primes
    if !is_prime(p) {
        return Err(CipherError::NotPrime { value: p.clone() });
    }
    if !is_prime(q) {
        return Err(CipherError::NotPrime { value: q.clone() });
    }
    if p == q {
        return Err(CipherError::IdenticalPrimes);
    }

    // Step 2: Compute n = p * q and φ(n) = (p-1)(q-1)
    let n = p * q;
    let phi = (p - 1u8) * (q - 1u8);

    // Step 3: Choose a public exponent coprime with φ(n)
    let e = choose_public_exponent(&phi);

    // Step 4: Compute d = e^(-1) mod φ(n)
    let d = mod_inverse(&e, &phi).ok_or_else(|| CipherError::DomainViolation {
        reason: format!("e={} has no inverse modulo phi={}", e, phi),
    })?;

    Ok(RsaKeyPair { n, e, d, phi })
}

/// Pick the public exponent: 65537 when coprime with phi, else scan the odd
/// candidates 3, 5, 7, ... until one is.
fn choose_public_exponent(phi: &BigUint) -> BigUint {
    let preferred = BigUint::from(PREFERRED_PUBLIC_EXPONENT);
    if gcd(&preferred, phi).is_one() {
        return preferred;
    }

    let mut candidate = BigUint::from(FALLBACK_EXPONENT_START);
    while !gcd(&candidate, phi).is_one() {
        candidate += 2u8;
    }
    candidate
}
