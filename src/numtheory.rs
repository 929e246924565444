// Number Theory Primitives
// Primality testing, gcd, modular inverse and modular exponentiation

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{CipherError, CipherResult};

/// Deterministic primality test by trial division.
///
/// Returns false for 0 and 1. Divisors are tried from 2 while their square
/// does not exceed `n`, which is the floor(sqrt(n)) bound without computing
/// the root. Cost is O(sqrt(n)); callers are expected to bound the magnitude
/// of `n`.
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }

    let mut i = two;
    while &i * &i <= *n {
        if (n % &i).is_zero() {
            return false;
        }
        i += 1u32;
    }

    true
}

/// Greatest common divisor, with gcd(a, 0) = a.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Extended Euclidean Algorithm
/// Returns (g, x, y) such that a*x + b*y = g = gcd(a, b)
///
/// Iterative so the stack stays bounded regardless of input size.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Compute modular inverse: a^(-1) mod m, normalized into [0, m)
/// Returns None if the inverse doesn't exist (gcd(a, m) != 1, or m = 0)
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }

    let m_signed = BigInt::from(m.clone());
    let (g, x, _) = extended_gcd(&BigInt::from(a.clone()), &m_signed);
    if !g.is_one() {
        return None;
    }

    let normalized = ((x % &m_signed) + &m_signed) % &m_signed;
    normalized.to_biguint()
}

/// Modular exponentiation: base^exp mod modulus
/// Uses iterative square-and-multiply
///
/// A zero modulus is a domain violation; a modulus of 1 maps everything to 0.
/// Exponent 0 yields 1 for any modulus above 1.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> CipherResult<BigUint> {
    if modulus.is_zero() {
        return Err(CipherError::DomainViolation {
            reason: "modulus must be positive".to_string(),
        });
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    Ok(result)
}

/// Convenience conversion for callers working with machine integers.
pub fn from_u64(n: u64) -> BigUint {
    BigUint::from(n)
}

/// Narrow a value back to u64 where the caller knows it fits.
pub fn to_u64(n: &BigUint) -> Option<u64> {
    n.to_u64()
}
