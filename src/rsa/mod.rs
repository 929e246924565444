// RSA Module - Main module file
// Textbook RSA: key generation and per-unit modular exponentiation

pub mod decrypt;
pub mod encrypt;
pub mod keygen;

pub use decrypt::{decrypt_message, decrypt_payload};
pub use encrypt::encrypt_message;
pub use keygen::{generate_keys, RsaKeyPair};

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::CipherError;

/// A sequence of encrypted units, one per input unit, in input order.
///
/// The transport rendering is space-separated decimal, the format the
/// request layer passes back for decryption.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptedPayload(pub Vec<BigUint>);

impl fmt::Display for EncryptedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, unit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

impl FromStr for EncryptedPayload {
    type Err = CipherError;

    /// Parse a space-separated decimal payload.
    ///
    /// Any token that is not an unsigned integer fails the whole parse;
    /// a blank input is the empty payload.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut units = Vec::new();
        for token in s.split_whitespace() {
            let unit = token.parse::<BigUint>().map_err(|_| CipherError::Malformed {
                reason: format!("'{}' is not an unsigned integer", token),
            })?;
            units.push(unit);
        }
        Ok(Self(units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_display() {
        let payload = EncryptedPayload(vec![
            BigUint::from(855u32),
            BigUint::from(2790u32),
            BigUint::from(0u32),
        ]);
        assert_eq!(payload.to_string(), "855 2790 0");
    }

    #[test]
    fn test_payload_parse_round_trip() {
        let payload: EncryptedPayload = "855 2790 0".parse().unwrap();
        assert_eq!(payload.0.len(), 3);
        assert_eq!(payload.to_string(), "855 2790 0");
    }

    #[test]
    fn test_payload_parse_tolerates_extra_whitespace() {
        let payload: EncryptedPayload = "  855\t2790 ".parse().unwrap();
        assert_eq!(payload.0.len(), 2);
    }

    #[test]
    fn test_empty_payload() {
        let payload: EncryptedPayload = "".parse().unwrap();
        assert!(payload.0.is_empty());
        assert_eq!(payload.to_string(), "");
    }

    #[test]
    fn test_malformed_token_rejected() {
        let result = "855 twelve 2790".parse::<EncryptedPayload>();
        assert!(matches!(result, Err(CipherError::Malformed { .. })));

        let result = "-3".parse::<EncryptedPayload>();
        assert!(matches!(result, Err(CipherError::Malformed { .. })));
    }
}
