//! Decryption orchestrator
//!
//! Ranks key lengths (Kasiski, falling back to Friedman), recovers a key for
//! each one and hands the resulting candidates to a validator in rank order.

use std::num::NonZeroUsize;

use tracing::{debug, info, warn};

use crate::alphabet::{Key, NormalizedText};
use crate::analysis::{
    frequency_analysis_decrypt, friedman_test, kasiski_examination, CandidateSource,
    KeyLengthCandidate,
};
use crate::config::AnalysisConfig;
use crate::error::{Result, VigenereError};
use crate::language::{LanguageProfile, ENGLISH};

/// A recovered key and the plaintext it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionCandidate {
    /// Position in the ranked key-length list, 0 = most likely
    pub rank: usize,
    pub key_length: KeyLengthCandidate,
    pub key: Key,
    pub plaintext: NormalizedText,
}

/// Accept/reject decision for a decryption candidate.
///
/// Called once per candidate, in rank order, until one is accepted.
pub trait CandidateValidator {
    fn accept(&mut self, candidate: &DecryptionCandidate) -> bool;
}

impl<F> CandidateValidator for F
where
    F: FnMut(&DecryptionCandidate) -> bool,
{
    fn accept(&mut self, candidate: &DecryptionCandidate) -> bool {
        self(candidate)
    }
}

/// Accepts the first candidate offered.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl CandidateValidator for AcceptAll {
    fn accept(&mut self, _candidate: &DecryptionCandidate) -> bool {
        true
    }
}

/// Accepts a candidate whose plaintext letter distribution is close to the language profile.
#[derive(Debug, Clone, Copy)]
pub struct EnglishFitness {
    /// Largest chi-squared value still accepted
    pub max_chi_squared: f64,
    pub profile: LanguageProfile,
}

impl EnglishFitness {
    pub const DEFAULT_THRESHOLD: f64 = 0.25;

    pub fn new(max_chi_squared: f64) -> Self {
        Self {
            max_chi_squared,
            profile: ENGLISH,
        }
    }

    pub fn score(&self, plaintext: &NormalizedText) -> f64 {
        self.profile.chi_squared(&plaintext.letter_counts())
    }
}

impl Default for EnglishFitness {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl CandidateValidator for EnglishFitness {
    fn accept(&mut self, candidate: &DecryptionCandidate) -> bool {
        let score = self.score(&candidate.plaintext);
        debug!(key = %candidate.key, score, "Scored candidate");
        score <= self.max_chi_squared
    }
}

/// Drives the full ciphertext-only attack.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: AnalysisConfig,
    profile: LanguageProfile,
}

impl Solver {
    /// Create a solver for English text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the configuration does not validate.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Self::with_profile(config, ENGLISH)
    }

    pub fn with_profile(config: AnalysisConfig, profile: LanguageProfile) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, profile })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Ranked key lengths: Kasiski first, the Friedman estimate if Kasiski finds nothing.
    ///
    /// # Errors
    ///
    /// * `EmptyInput` if the text has no letters.
    /// * `AnalysisInconclusive` if neither estimator yields a length of at least 2.
    pub fn key_length_candidates(&self, ciphertext: &NormalizedText) -> Result<Vec<KeyLengthCandidate>> {
        if ciphertext.is_empty() {
            return Err(VigenereError::EmptyInput);
        }

        let mut candidates = kasiski_examination(ciphertext, &self.config);
        if candidates.is_empty() {
            warn!("Kasiski examination found no repeating sequences, trying Friedman test");

            let estimate = friedman_test(ciphertext, &self.profile);
            if estimate <= 1 {
                warn!(estimate, "Friedman test failed to estimate key length");
                return Err(VigenereError::AnalysisInconclusive);
            }

            info!(estimate, "Friedman test estimated key length");
            candidates.push(KeyLengthCandidate {
                length: estimate as usize,
                support: 0,
                source: CandidateSource::Friedman,
            });
        } else {
            let lengths: Vec<usize> = candidates.iter().map(|c| c.length).collect();
            info!(?lengths, "Probable key lengths from Kasiski examination");
        }

        if let Some(max) = self.config.max_candidates {
            candidates.truncate(max);
        }

        Ok(candidates)
    }

    /// Lazily yields one decryption candidate per ranked key length.
    ///
    /// # Errors
    ///
    /// Same as [`Solver::key_length_candidates`].
    pub fn candidates<'a>(
        &'a self,
        ciphertext: &'a NormalizedText,
    ) -> Result<impl Iterator<Item = DecryptionCandidate> + 'a> {
        let key_lengths = self.key_length_candidates(ciphertext)?;

        Ok(key_lengths
            .into_iter()
            .enumerate()
            .filter_map(move |(rank, key_length)| {
                let length = NonZeroUsize::new(key_length.length)?;
                let (key, plaintext) = frequency_analysis_decrypt(ciphertext, length, &self.profile);
                Some(DecryptionCandidate {
                    rank,
                    key_length,
                    key,
                    plaintext,
                })
            }))
    }

    /// Offers candidates to `validator` in rank order and returns the first accepted one.
    ///
    /// # Errors
    ///
    /// * `EmptyInput` if `ciphertext` has no letters.
    /// * `AnalysisInconclusive` if no key length could be estimated.
    /// * `NoCandidateAccepted` if the validator rejects every candidate.
    pub fn solve<V>(&self, ciphertext: &str, validator: &mut V) -> Result<DecryptionCandidate>
    where
        V: CandidateValidator + ?Sized,
    {
        let ciphertext = NormalizedText::normalize(ciphertext);
        let mut tried = 0;

        for candidate in self.candidates(&ciphertext)? {
            tried += 1;
            debug!(rank = candidate.rank, length = candidate.key_length.length, key = %candidate.key, "Offering candidate");

            if validator.accept(&candidate) {
                info!(key = %candidate.key, "Candidate accepted");
                return Ok(candidate);
            }
        }

        warn!(tried, "No candidate accepted");
        Err(VigenereError::NoCandidateAccepted { tried })
    }
}
