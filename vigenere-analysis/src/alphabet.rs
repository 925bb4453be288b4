//! Alphabet codec: letters as residues 0-25, normalized text and keys

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VigenereError};

/// Number of letters in the Latin alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A single uppercase Latin letter, stored as its residue (A=0, B=1, ..., Z=25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Letter for a residue in `0..26`, `None` outside that range.
    pub fn from_residue(residue: u8) -> Option<Self> {
        (usize::from(residue) < ALPHABET_SIZE).then_some(Self(residue))
    }

    pub(crate) fn from_residue_wrapping(residue: u8) -> Self {
        Self(residue % ALPHABET_SIZE as u8)
    }

    /// Letter for an ASCII letter of either case.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Residue in `0..26`
    pub fn residue(self) -> u8 {
        self.0
    }

    /// Uppercase character
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Shifts forward by the residue of `by` (encryption direction).
    pub fn shift(self, by: Letter) -> Letter {
        Self((self.0 + by.0) % ALPHABET_SIZE as u8)
    }

    /// Shifts backward by the residue of `by` (decryption direction).
    pub fn unshift(self, by: Letter) -> Letter {
        Self((self.0 + ALPHABET_SIZE as u8 - by.0) % ALPHABET_SIZE as u8)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Converts an ASCII letter (either case) to its residue.
pub fn letter_to_residue(c: char) -> Option<u8> {
    Letter::from_char(c).map(Letter::residue)
}

/// Converts a residue in `0..26` to its uppercase letter.
pub fn residue_to_letter(residue: u8) -> Option<char> {
    Letter::from_residue(residue).map(Letter::to_char)
}

/// Text reduced to the 26-letter alphabet: non-letters dropped, case folded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(Vec<Letter>);

impl NormalizedText {
    /// Keeps only ASCII letters and uppercases them. Never fails; empty input gives empty text.
    pub fn normalize(text: &str) -> Self {
        Self(text.chars().filter_map(Letter::from_char).collect())
    }

    pub fn from_letters(letters: Vec<Letter>) -> Self {
        Self(letters)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.iter().copied()
    }

    /// Occurrence count of each letter, indexed by residue.
    pub fn letter_counts(&self) -> [usize; ALPHABET_SIZE] {
        count_letters(&self.0)
    }
}

/// Counts the occurrences of each letter, indexed by residue.
pub fn count_letters(letters: &[Letter]) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for letter in letters {
        counts[usize::from(letter.residue())] += 1;
    }
    counts
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for NormalizedText {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

/// A non-empty Vigenère key. Each letter is the shift applied at its position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(Vec<Letter>);

impl Key {
    /// Parses a keyword: must be non-empty and consist of ASCII letters only (any case).
    pub fn parse(keyword: &str) -> Result<Self> {
        if keyword.is_empty() {
            return Err(VigenereError::InvalidKey("key cannot be empty".to_string()));
        }

        keyword
            .chars()
            .map(|c| {
                Letter::from_char(c).ok_or_else(|| {
                    VigenereError::InvalidKey(format!("'{}' is not a letter", c))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn from_letters(letters: Vec<Letter>) -> Result<Self> {
        if letters.is_empty() {
            return Err(VigenereError::InvalidKey("key cannot be empty".to_string()));
        }
        Ok(Self(letters))
    }

    /// Caller guarantees `letters` is non-empty.
    pub(crate) fn from_letters_unchecked(letters: Vec<Letter>) -> Self {
        debug_assert!(!letters.is_empty());
        Self(letters)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key letter applied at text position `index`.
    pub fn at(&self, index: usize) -> Letter {
        self.0[index % self.0.len()]
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
