//! Vigenère transform over normalized text

use crate::alphabet::{Key, Letter, NormalizedText};
use crate::error::Result;

/// Encrypts normalized text: `c[i] = (p[i] + k[i mod |k|]) mod 26`.
pub fn encrypt(plaintext: &NormalizedText, key: &Key) -> NormalizedText {
    NormalizedText::from_letters(
        plaintext
            .iter()
            .enumerate()
            .map(|(i, letter)| letter.shift(key.at(i)))
            .collect(),
    )
}

/// Decrypts normalized text: `p[i] = (c[i] - k[i mod |k|] + 26) mod 26`.
pub fn decrypt(ciphertext: &NormalizedText, key: &Key) -> NormalizedText {
    NormalizedText::from_letters(
        ciphertext
            .iter()
            .enumerate()
            .map(|(i, letter)| letter.unshift(key.at(i)))
            .collect(),
    )
}

/// Normalizes `plaintext`, validates `keyword` and returns the uppercase ciphertext.
///
/// # Errors
///
/// `InvalidKey` if the keyword is empty or contains non-letters.
pub fn encrypt_str(plaintext: &str, keyword: &str) -> Result<String> {
    let key = Key::parse(keyword)?;
    Ok(encrypt(&NormalizedText::normalize(plaintext), &key).to_string())
}

/// Normalizes `ciphertext`, validates `keyword` and returns the uppercase plaintext.
///
/// # Errors
///
/// `InvalidKey` if the keyword is empty or contains non-letters.
pub fn decrypt_str(ciphertext: &str, keyword: &str) -> Result<String> {
    let key = Key::parse(keyword)?;
    Ok(decrypt(&NormalizedText::normalize(ciphertext), &key).to_string())
}

/// Direction of a format-preserving transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Applies the cipher to `content` in place of its letters, keeping case,
/// whitespace and punctuation. The key only advances on ASCII letters.
///
/// # Arguments
///
/// * `content` - The input text.
/// * `key` - The cipher key.
/// * `direction` - Whether to encrypt or decrypt.
///
/// # Returns
///
/// A `String` with the same layout as `content`.
pub fn apply_preserving_format(content: &str, key: &Key, direction: Direction) -> String {
    let mut key_index: usize = 0;

    content
        .chars()
        .map(|c| match Letter::from_char(c) {
            Some(letter) => {
                let shifted = match direction {
                    Direction::Encrypt => letter.shift(key.at(key_index)),
                    Direction::Decrypt => letter.unshift(key.at(key_index)),
                };
                key_index += 1;

                // Keep the original case
                if c.is_ascii_lowercase() {
                    shifted.to_char().to_ascii_lowercase()
                } else {
                    shifted.to_char()
                }
            }
            None => c,
        })
        .collect()
}
