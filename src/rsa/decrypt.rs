// RSA Decryption Implementation
// Parses the transport payload and recovers characters from code points

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::EncryptedPayload;
use crate::error::{CipherError, CipherResult};
use crate::numtheory::mod_pow;

/// Decrypt a space-separated decimal payload with the private exponent `d`
/// and modulus `n`.
///
/// An unparseable token fails the whole payload with a malformed error
/// rather than being skipped, so the caller sees exactly what went wrong.
pub fn decrypt_message(payload: &str, d: &BigUint, n: &BigUint) -> CipherResult<String> {
    let payload: EncryptedPayload = payload.parse()?;
    decrypt_payload(&payload, d, n)
}

/// Decrypt an already-parsed payload.
///
/// Each unit is mapped through m = c^d mod n and reconstituted as the
/// character with code point m, mirroring the encoding used by encryption.
pub fn decrypt_payload(payload: &EncryptedPayload, d: &BigUint, n: &BigUint) -> CipherResult<String> {
    let mut message = String::with_capacity(payload.0.len());
    for unit in &payload.0 {
        let m = mod_pow(unit, d, n)?;
        message.push(char_from_code(&m)?);
    }
    Ok(message)
}

/// Map a recovered value back to a character.
fn char_from_code(m: &BigUint) -> CipherResult<char> {
    m.to_u32()
        .and_then(char::from_u32)
        .ok_or_else(|| CipherError::Malformed {
            reason: format!("recovered value {} is not a valid character code", m),
        })
}
