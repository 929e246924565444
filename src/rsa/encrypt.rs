// RSA Encryption Implementation
// Encrypts per input unit: character code points, or pre-tokenized numbers

use num_bigint::BigUint;

use super::EncryptedPayload;
use crate::error::{CipherError, CipherResult};
use crate::numtheory::mod_pow;

/// Encrypt a message with the public exponent `e` and modulus `n`.
///
/// When the trimmed message is nothing but whitespace-separated decimal
/// digit groups, each group is treated as an already-encoded integer unit.
/// Any other message is encrypted character by character using Unicode code
/// points. Every unit must be below the modulus; textbook RSA has no
/// padding, so a unit at or above `n` cannot be recovered and is rejected
/// as a domain violation.
pub fn encrypt_message(message: &str, e: &BigUint, n: &BigUint) -> CipherResult<EncryptedPayload> {
    let units = match parse_numeric_units(message) {
        Some(units) => units,
        None => message.chars().map(|ch| BigUint::from(ch as u32)).collect(),
    };

    let mut encrypted = Vec::with_capacity(units.len());
    for unit in &units {
        encrypted.push(encrypt_unit(unit, e, n)?);
    }
    Ok(EncryptedPayload(encrypted))
}

/// Encrypt a single unit: c = m^e mod n.
fn encrypt_unit(m: &BigUint, e: &BigUint, n: &BigUint) -> CipherResult<BigUint> {
    if m >= n {
        return Err(CipherError::DomainViolation {
            reason: format!("unit {} is not below the modulus {}", m, n),
        });
    }
    mod_pow(m, e, n)
}

/// Recognize a message that is already a sequence of numbers.
///
/// Returns the parsed units only when every whitespace-separated token is
/// all decimal digits; otherwise the message goes down the per-character
/// path.
fn parse_numeric_units(message: &str) -> Option<Vec<BigUint>> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut units = Vec::new();
    for token in trimmed.split_whitespace() {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        units.push(token.parse().ok()?);
    }
    Some(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numtheory::from_u64;

    #[test]
    fn test_known_numeric_vector() {
        // 65^17 mod 3233 = 2790, the classic worked example
        let payload = encrypt_message("65", &from_u64(17), &from_u64(3233)).unwrap();
        assert_eq!(payload.to_string(), "2790");
    }

    #[test]
    fn test_numeric_sequence() {
        let payload = encrypt_message(" 65 66 ", &from_u64(17), &from_u64(3233)).unwrap();
        assert_eq!(payload.0.len(), 2);
        assert_eq!(payload.0[0], from_u64(2790));
    }

    #[test]
    fn test_character_encoding() {
        // 'A' is code point 65, so the text path matches the numeric one
        let text = encrypt_message("A", &from_u64(17), &from_u64(3233)).unwrap();
        assert_eq!(text.to_string(), "2790");
    }

    #[test]
    fn test_mixed_token_falls_back_to_characters() {
        let payload = encrypt_message("12a", &from_u64(17), &from_u64(3233)).unwrap();
        // '1', '2', 'a' as code points, not the number 12 and a letter
        assert_eq!(payload.0.len(), 3);
    }

    #[test]
    fn test_order_preserved() {
        let ab = encrypt_message("AB", &from_u64(17), &from_u64(3233)).unwrap();
        let ba = encrypt_message("BA", &from_u64(17), &from_u64(3233)).unwrap();
        assert_eq!(ab.0[0], ba.0[1]);
        assert_eq!(ab.0[1], ba.0[0]);
    }

    #[test]
    fn test_empty_message() {
        let payload = encrypt_message("", &from_u64(17), &from_u64(3233)).unwrap();
        assert!(payload.0.is_empty());
    }

    #[test]
    fn test_unit_at_or_above_modulus_rejected() {
        let result = encrypt_message("A", &from_u64(3), &from_u64(15));
        assert!(matches!(result, Err(CipherError::DomainViolation { .. })));

        let result = encrypt_message("3233", &from_u64(17), &from_u64(3233));
        assert!(matches!(result, Err(CipherError::DomainViolation { .. })));
    }
}
