// Default Parameters
// Documented defaults used by the request-handling front-end

/// Default Caesar shift when the caller supplies none.
pub const DEFAULT_CAESAR_SHIFT: i64 = 3;

/// Default Vigenere key when the caller supplies none.
pub const DEFAULT_VIGENERE_KEY: &str = "CLE";

/// Default demonstration primes; generate_keys(61, 53) yields n = 3233.
pub const DEFAULT_PRIME_P: u64 = 61;
pub const DEFAULT_PRIME_Q: u64 = 53;

/// Preferred RSA public exponent, used whenever it is coprime with phi.
pub const PREFERRED_PUBLIC_EXPONENT: u32 = 65537;

/// First candidate of the odd-number scan when 65537 is not coprime with phi.
pub const FALLBACK_EXPONENT_START: u32 = 3;
