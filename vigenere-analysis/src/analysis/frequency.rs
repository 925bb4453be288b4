//! Key recovery by per-column chi-squared frequency analysis

use std::num::NonZeroUsize;

use tracing::debug;

use crate::alphabet::{count_letters, Key, Letter, NormalizedText, ALPHABET_SIZE};
use crate::cipher::decrypt;
use crate::language::LanguageProfile;

/// Splits text into `key_length` columns.
/// Column `j` holds every letter at a position `≡ j (mod key_length)`, in order.
pub fn split_columns(text: &NormalizedText, key_length: NonZeroUsize) -> Vec<Vec<Letter>> {
    let key_length = key_length.get();
    let mut columns = vec![Vec::with_capacity(text.len() / key_length + 1); key_length];

    for (i, letter) in text.iter().enumerate() {
        columns[i % key_length].push(letter);
    }

    columns
}

/// Finds the Caesar shift of a column using the chi-squared test.
///
/// Every shift 0-25 is tried; the first one with the lowest chi-squared wins.
pub fn find_shift(column: &[Letter], profile: &LanguageProfile) -> Letter {
    let counts = count_letters(column);
    let mut best_shift: u8 = 0;
    let mut best_chi_squared = f64::INFINITY;

    for shift in 0..ALPHABET_SIZE {
        // Decrypting with `shift` moves the count of letter i + shift to letter i
        let mut shifted = [0usize; ALPHABET_SIZE];
        for (i, slot) in shifted.iter_mut().enumerate() {
            *slot = counts[(i + shift) % ALPHABET_SIZE];
        }

        let chi_squared = profile.chi_squared(&shifted);
        if chi_squared < best_chi_squared {
            best_chi_squared = chi_squared;
            best_shift = shift as u8;
        }
    }

    Letter::from_residue_wrapping(best_shift)
}

/// Reconstructs the key, one independently solved column per key position.
pub fn recover_key(
    ciphertext: &NormalizedText,
    key_length: NonZeroUsize,
    profile: &LanguageProfile,
) -> Key {
    let letters: Vec<Letter> = split_columns(ciphertext, key_length)
        .iter()
        .map(|column| find_shift(column, profile))
        .collect();

    let key = Key::from_letters_unchecked(letters);
    debug!(key_length = key_length.get(), %key, "Recovered key");
    key
}

/// Recovers the key for an assumed length and decrypts with it.
pub fn frequency_analysis_decrypt(
    ciphertext: &NormalizedText,
    key_length: NonZeroUsize,
    profile: &LanguageProfile,
) -> (Key, NormalizedText) {
    let key = recover_key(ciphertext, key_length, profile);
    let plaintext = decrypt(ciphertext, &key);
    (key, plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encrypt;
    use crate::language::ENGLISH;

    const SAMPLE: &str = "It was a bright cold day in the early spring, and the old harbour town was waking \
        slowly to the sound of gulls and the creak of moored boats. The fishermen had gone \
        out before dawn, leaving their wives to mend the nets and sell the small catch of \
        the previous evening at the market by the church. Children ran along the stone wall \
        that kept the sea from the houses, shouting at one another and daring each other to \
        climb down to the wet rocks below. Nobody in the town remembered a time when things \
        had been very different, and most of the people there were content to believe that \
        nothing would ever change. Yet on that particular morning a stranger arrived on the \
        first coach from the city, carrying a leather case and a letter addressed to the \
        mayor, and within a week the whole town was talking of nothing else but the plans he \
        had brought with him for the building of a new railway along the coast.";

    fn text(s: &str) -> NormalizedText {
        NormalizedText::normalize(s)
    }

    fn length(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_split_columns() {
        let columns = split_columns(&text("ABCDEFGH"), length(3));
        let as_strings: Vec<String> = columns
            .iter()
            .map(|c| c.iter().map(|l| l.to_char()).collect())
            .collect();
        assert_eq!(as_strings, vec!["ADG", "BEH", "CF"]);
    }

    #[test]
    fn test_split_columns_longer_than_text() {
        let columns = split_columns(&text("AB"), length(4));
        assert_eq!(columns.len(), 4);
        assert!(columns[2].is_empty() && columns[3].is_empty());
    }

    #[test]
    fn test_find_shift_caesar() {
        let plaintext = text(SAMPLE);
        let key = Key::parse("H").unwrap();
        let ciphertext = encrypt(&plaintext, &key);
        assert_eq!(find_shift(ciphertext.letters(), &ENGLISH).to_char(), 'H');
    }

    #[test]
    fn test_find_shift_empty_column_is_a() {
        assert_eq!(find_shift(&[], &ENGLISH).to_char(), 'A');
    }

    #[test]
    fn test_recover_four_letter_key() {
        let plaintext = text(SAMPLE);
        for keyword in ["LAMP", "CODE", "WIND"] {
            let key = Key::parse(keyword).unwrap();
            let ciphertext = encrypt(&plaintext, &key);

            let (recovered, decrypted) = frequency_analysis_decrypt(&ciphertext, length(4), &ENGLISH);
            assert_eq!(recovered, key);
            assert_eq!(decrypted, plaintext);
        }
    }

    #[test]
    fn test_key_length_longer_than_text() {
        let (key, plaintext) = frequency_analysis_decrypt(&text("XY"), length(5), &ENGLISH);
        assert_eq!(key.len(), 5);
        assert_eq!(plaintext.len(), 2);
    }
}
