// Caesar Shift Cipher
// Per-letter alphabet rotation with configurable character handling

use super::{CipherPolicy, Direction};

/// Encrypt text with a Caesar shift under an explicit policy.
pub fn caesar_with_policy(
    text: &str,
    shift: i64,
    direction: Direction,
    policy: CipherPolicy,
) -> String {
    let shift = match direction {
        Direction::Encrypt => shift,
        Direction::Decrypt => -shift,
    };

    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            result.push(policy.shift_letter(ch, shift));
        } else if let Some(passed) = policy.pass_unknown(ch) {
            result.push(passed);
        }
    }
    result
}

/// Apply the Caesar cipher in the given direction with the canonical policy.
pub fn caesar(text: &str, shift: i64, direction: Direction) -> String {
    caesar_with_policy(text, shift, direction, CipherPolicy::default())
}

/// Encrypt text by shifting each letter forward by `shift` positions.
pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    caesar(text, shift, Direction::Encrypt)
}

/// Decrypt a Caesar ciphertext; equivalent to encrypting with the negated shift.
pub fn caesar_decrypt(text: &str, shift: i64) -> String {
    caesar(text, shift, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_shift() {
        assert_eq!(caesar_encrypt("ABC", 3), "DEF");
    }

    #[test]
    fn test_wrap_around() {
        assert_eq!(caesar_encrypt("XYZ", 3), "ABC");
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(caesar_encrypt("Hello, World!", 3), "Khoor, Zruog!");
    }

    #[test]
    fn test_negative_shift() {
        assert_eq!(caesar_encrypt("DEF", -3), "ABC");
    }

    #[test]
    fn test_oversized_shift() {
        assert_eq!(caesar_encrypt("ABC", 29), "DEF");
        assert_eq!(caesar_encrypt("ABC", 26), "ABC");
    }

    #[test]
    fn test_decrypt_is_negated_encrypt() {
        let text = "Attack at dawn!";
        assert_eq!(caesar_decrypt(text, 7), caesar_encrypt(text, -7));
    }

    #[test]
    fn test_round_trip() {
        let text = "The quick brown fox jumps over 13 lazy dogs.";
        for shift in [-31, -1, 0, 3, 25, 26, 100] {
            assert_eq!(caesar_decrypt(&caesar_encrypt(text, shift), shift), text);
        }
    }

    #[test]
    fn test_non_alphabetic_pass_through() {
        assert_eq!(caesar_encrypt("1 + 2 = 3", 5), "1 + 2 = 3");
    }

    #[test]
    fn test_uppercase_policy() {
        let policy = CipherPolicy {
            preserve_case: false,
            pass_through_unknown: true,
        };
        assert_eq!(
            caesar_with_policy("abc xyz", 3, Direction::Encrypt, policy),
            "DEF ABC"
        );
    }

    #[test]
    fn test_drop_unknown_policy() {
        let policy = CipherPolicy {
            preserve_case: true,
            pass_through_unknown: false,
        };
        assert_eq!(
            caesar_with_policy("A B!", 3, Direction::Encrypt, policy),
            "DE"
        );
    }
}
