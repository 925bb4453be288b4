//! Tunable parameters of the key-length analysis

use std::ops::RangeInclusive;

use crate::error::{Result, VigenereError};

/// Settings for Kasiski examination and candidate selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Shortest repeated sequence considered
    pub min_sequence_len: usize,
    /// Longest repeated sequence considered
    pub max_sequence_len: usize,
    /// Largest key length Kasiski examination may propose
    pub max_factor: usize,
    /// Cap on how many ranked key lengths the solver tries (`None` = all)
    pub max_candidates: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sequence_len: 3,
            max_sequence_len: 5,
            max_factor: 20,
            max_candidates: None,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequence_lengths(mut self, min: usize, max: usize) -> Self {
        self.min_sequence_len = min;
        self.max_sequence_len = max;
        self
    }

    pub fn with_max_factor(mut self, max_factor: usize) -> Self {
        self.max_factor = max_factor;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: Option<usize>) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn sequence_lengths(&self) -> RangeInclusive<usize> {
        self.min_sequence_len..=self.max_sequence_len
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_sequence_len < 2 {
            return Err(VigenereError::InvalidConfig(
                "minimum sequence length must be at least 2".to_string(),
            ));
        }
        if self.min_sequence_len > self.max_sequence_len {
            return Err(VigenereError::InvalidConfig(format!(
                "minimum sequence length {} exceeds maximum {}",
                self.min_sequence_len, self.max_sequence_len
            )));
        }
        if self.max_factor < 2 {
            return Err(VigenereError::InvalidConfig(
                "maximum factor must be at least 2".to_string(),
            ));
        }
        if self.max_candidates == Some(0) {
            return Err(VigenereError::InvalidConfig(
                "candidate cap must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sequence_lengths(), 3..=5);
        assert_eq!(config.max_factor, 20);
    }

    #[test]
    fn test_invalid_configs() {
        let cases = [
            AnalysisConfig::new().with_sequence_lengths(1, 5),
            AnalysisConfig::new().with_sequence_lengths(6, 4),
            AnalysisConfig::new().with_max_factor(1),
            AnalysisConfig::new().with_max_candidates(Some(0)),
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(VigenereError::InvalidConfig(_))
            ));
        }
    }
}
