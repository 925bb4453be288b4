//! Reference letter statistics for the target language

use crate::alphabet::ALPHABET_SIZE;

/// Letter frequencies and index-of-coincidence constants of a natural language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageProfile {
    /// Expected relative frequency of each letter, indexed by residue
    pub frequencies: [f64; ALPHABET_SIZE],
    /// Index of coincidence of plaintext in this language
    pub kappa_plaintext: f64,
    /// Index of coincidence of uniformly random letters
    pub kappa_random: f64,
}

/// English letter frequencies for frequency analysis
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

pub const ENGLISH: LanguageProfile = LanguageProfile {
    frequencies: ENGLISH_FREQUENCIES,
    kappa_plaintext: 0.065,
    kappa_random: 0.0385,
};

impl LanguageProfile {
    /// Chi-squared distance between observed letter counts and this profile.
    ///
    /// Observed values are relative frequencies (`count / total`, all zero for empty input).
    /// Letters with an expected frequency of zero are skipped.
    pub fn chi_squared(&self, counts: &[usize; ALPHABET_SIZE]) -> f64 {
        let total: usize = counts.iter().sum();

        counts
            .iter()
            .zip(self.frequencies.iter())
            .filter(|&(_, &expected)| expected > 0.0)
            .map(|(&count, &expected)| {
                let observed = if total > 0 {
                    count as f64 / total as f64
                } else {
                    0.0
                };
                (observed - expected).powi(2) / expected
            })
            .sum()
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        ENGLISH
    }
}
