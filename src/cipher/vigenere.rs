// Vigenere Polyalphabetic Cipher
// Repeating-key Caesar shifts; the key index advances only on letters

use super::{CipherPolicy, Direction};

/// Derive the per-letter shift sequence from a key.
///
/// Non-alphabetic key characters are discarded and the rest uppercased, so
/// "Lemon", "LEMON" and "le-mon" all produce the same keystream.
fn keystream(key: &str) -> Vec<i64> {
    key.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| i64::from(ch.to_ascii_uppercase() as u8 - b'A'))
        .collect()
}

/// Apply the Vigenere cipher under an explicit policy.
///
/// An empty key (or one with no letters at all) leaves the text untouched.
/// One keystream position is consumed per alphabetic input character;
/// non-alphabetic characters neither advance the key nor are shifted.
pub fn vigenere_with_policy(
    text: &str,
    key: &str,
    direction: Direction,
    policy: CipherPolicy,
) -> String {
    let stream = keystream(key);
    if stream.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut key_index = 0usize;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            let mut shift = stream[key_index % stream.len()];
            if direction == Direction::Decrypt {
                shift = -shift;
            }
            result.push(policy.shift_letter(ch, shift));
            key_index += 1;
        } else if let Some(passed) = policy.pass_unknown(ch) {
            result.push(passed);
        }
    }
    result
}

/// Apply the Vigenere cipher in the given direction with the canonical policy.
pub fn vigenere(text: &str, key: &str, direction: Direction) -> String {
    vigenere_with_policy(text, key, direction, CipherPolicy::default())
}

/// Encrypt text with a repeating-key Vigenere cipher.
pub fn vigenere_encrypt(text: &str, key: &str) -> String {
    vigenere(text, key, Direction::Encrypt)
}

/// Decrypt a Vigenere ciphertext by subtracting the keystream shifts.
pub fn vigenere_decrypt(text: &str, key: &str) -> String {
    vigenere(text, key, Direction::Decrypt)
}
