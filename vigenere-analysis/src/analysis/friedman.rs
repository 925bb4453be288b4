//! Friedman test: key length from the index of coincidence

use tracing::debug;

use crate::alphabet::NormalizedText;
use crate::language::LanguageProfile;

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// # Arguments
///
/// * `text` - The input text to analyze.
///
/// # Returns
///
/// The Index of Coincidence value (0.0 if text has < 2 letters).
pub fn index_of_coincidence(text: &NormalizedText) -> f64 {
    let total = text.len();

    // Return 0.0 if insufficient data for meaningful IC calculation
    if total < 2 {
        return 0.0;
    }

    // IC: sum of (frequency_i * (frequency_i - 1)) / (total * (total - 1))
    let numerator: usize = text
        .letter_counts()
        .iter()
        .map(|&freq| freq * freq.saturating_sub(1))
        .sum();

    numerator as f64 / (total * (total - 1)) as f64
}

/// Estimates the key length as `round((K_p - K_r) / (IC - K_r))`.
///
/// Returns 0 for texts with fewer than two letters and when the IC equals
/// `K_r` exactly. Any value below 2 (including negative ones, produced when
/// the IC is under `K_r`) is not a usable key length.
pub fn friedman_test(text: &NormalizedText, profile: &LanguageProfile) -> i64 {
    if text.len() < 2 {
        return 0;
    }

    let ic = index_of_coincidence(text);
    let denominator = ic - profile.kappa_random;
    if denominator == 0.0 {
        return 0;
    }

    let estimate = ((profile.kappa_plaintext - profile.kappa_random) / denominator).round_ties_even();
    debug!(ic, estimate, "Friedman test");

    estimate as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::ENGLISH;

    fn text(s: &str) -> NormalizedText {
        NormalizedText::normalize(s)
    }

    #[test]
    fn test_ic_calculation() {
        let uniform_text = text("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(index_of_coincidence(&uniform_text), 0.0);

        let single_letter = text("AAAA");
        assert_eq!(index_of_coincidence(&single_letter), 1.0);

        // A:2 B:1 -> 2 / 6
        let mixed = text("ABA");
        assert!((index_of_coincidence(&mixed) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_ic_short_text_is_zero() {
        assert_eq!(index_of_coincidence(&text("")), 0.0);
        assert_eq!(index_of_coincidence(&text("Q")), 0.0);
    }

    #[test]
    fn test_friedman_short_text_is_zero() {
        assert_eq!(friedman_test(&text(""), &ENGLISH), 0);
        assert_eq!(friedman_test(&text("X"), &ENGLISH), 0);
    }

    #[test]
    fn test_friedman_flat_text_is_unusable() {
        // IC = 0, below K_r, gives a negative estimate
        assert!(friedman_test(&text("ABCDEFGHIJKLMNOPQRSTUVWXYZ"), &ENGLISH) <= 1);
    }

    #[test]
    fn test_friedman_degenerate_ic() {
        let profile = LanguageProfile {
            kappa_random: 0.0,
            ..ENGLISH
        };
        assert_eq!(friedman_test(&text("ABCDEFGHIJKLMNOPQRSTUVWXYZ"), &profile), 0);
    }

    #[test]
    fn test_friedman_estimate() {
        // IC = 16 / 380
        let ciphertext = text("JSBGTNSPYDFWPOXSSADQ");
        assert_eq!(friedman_test(&ciphertext, &ENGLISH), 7);
    }
}
