//! Key-length estimation and key recovery

pub mod frequency;
pub mod friedman;
pub mod kasiski;

pub use frequency::{find_shift, frequency_analysis_decrypt, recover_key, split_columns};
pub use friedman::{friedman_test, index_of_coincidence};
pub use kasiski::{factors, kasiski_examination, repeated_sequences, spacings};

use std::fmt;

/// Which estimator proposed a key length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// Factor of a distance between repeated sequences
    Kasiski,
    /// Index-of-coincidence estimate
    Friedman,
}

/// A proposed key length. Candidates are handled in ranked sequences, most likely first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLengthCandidate {
    /// Proposed key length (at least 2)
    pub length: usize,
    /// Number of distances the length divides (Kasiski) or 0 (Friedman)
    pub support: usize,
    pub source: CandidateSource,
}

impl fmt::Display for KeyLengthCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            CandidateSource::Kasiski => write!(f, "{} (x{})", self.length, self.support),
            CandidateSource::Friedman => write!(f, "{} (Friedman)", self.length),
        }
    }
}
