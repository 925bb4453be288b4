//! Kasiski examination
//!
//! Repeated ciphertext sequences are usually the same plaintext enciphered
//! under the same key offset, so the distance between them tends to be a
//! multiple of the key length.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::{CandidateSource, KeyLengthCandidate};
use crate::alphabet::{Letter, NormalizedText};
use crate::config::AnalysisConfig;

/// Maps every substring with a length in `config.sequence_lengths()` to its
/// start positions, in ascending order.
pub fn repeated_sequences<'a>(
    text: &'a NormalizedText,
    config: &AnalysisConfig,
) -> HashMap<&'a [Letter], Vec<usize>> {
    let mut sequences: HashMap<&[Letter], Vec<usize>> = HashMap::new();

    for seq_len in config.sequence_lengths() {
        for (position, window) in text.letters().windows(seq_len).enumerate() {
            sequences.entry(window).or_default().push(position);
        }
    }

    sequences
}

/// Distances between consecutive occurrences of each repeated sequence.
pub fn spacings(text: &NormalizedText, config: &AnalysisConfig) -> Vec<usize> {
    repeated_sequences(text, config)
        .values()
        .filter(|positions| positions.len() > 1)
        .flat_map(|positions| positions.windows(2).map(|pair| pair[1] - pair[0]))
        .collect()
}

/// Factors of `n` in `2..=max_factor`, excluding `n` itself.
pub fn factors(n: usize, max_factor: usize) -> Vec<usize> {
    (2..n.min(max_factor + 1)).filter(|f| n % f == 0).collect()
}

/// Ranks key lengths by how many repeat distances they divide.
///
/// Sorted by descending count; equal counts are ordered by ascending length.
/// Empty when no sequence repeats.
pub fn kasiski_examination(
    text: &NormalizedText,
    config: &AnalysisConfig,
) -> Vec<KeyLengthCandidate> {
    let spacings = spacings(text, config);
    debug!(spacings = spacings.len(), "Collected repeat distances");

    let mut factor_counts: BTreeMap<usize, usize> = BTreeMap::new();
    for spacing in spacings {
        for factor in factors(spacing, config.max_factor) {
            *factor_counts.entry(factor).or_default() += 1;
        }
    }

    let mut candidates: Vec<KeyLengthCandidate> = factor_counts
        .into_iter()
        .map(|(length, support)| KeyLengthCandidate {
            length,
            support,
            source: CandidateSource::Kasiski,
        })
        .collect();

    candidates.sort_by(|a, b| b.support.cmp(&a.support).then(a.length.cmp(&b.length)));
    debug!(candidates = candidates.len(), "Kasiski examination finished");

    candidates
}
