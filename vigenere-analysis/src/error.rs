//! Error types for Vigenère transforms and cryptanalysis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Input contains no alphabetic characters")]
    EmptyInput,

    #[error("Analysis inconclusive: neither Kasiski examination nor the Friedman test produced a usable key length")]
    AnalysisInconclusive,

    #[error("No candidate accepted ({tried} tried)")]
    NoCandidateAccepted { tried: usize },

    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, VigenereError>;
