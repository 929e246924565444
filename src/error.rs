// Engine error taxonomy
// Structured failures returned by key generation and the RSA message paths

use num_bigint::BigUint;
use thiserror::Error;

/// Errors reported by the cipher engine.
///
/// Every failure is returned as a value; no engine operation panics on bad
/// caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// A key-generation input failed the primality check.
    #[error("{value} is not prime")]
    NotPrime { value: BigUint },

    /// Key generation requires two distinct primes.
    #[error("p and q must be distinct primes")]
    IdenticalPrimes,

    /// A payload token could not be parsed, or a decrypted value has no
    /// character mapping.
    #[error("malformed payload: {reason}")]
    Malformed { reason: String },

    /// An input value falls outside the range the operation is defined on.
    #[error("domain violation: {reason}")]
    DomainViolation { reason: String },
}

/// Result type for engine operations.
pub type CipherResult<T> = Result<T, CipherError>;
