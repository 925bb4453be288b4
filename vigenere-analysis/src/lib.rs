//! # Vigenère Analysis Library
//!
//! Recovers the key and plaintext of a Vigenère cipher from ciphertext alone.
//!
//! ## Pipeline
//!
//! - **Normalization** - keep ASCII letters, fold case
//! - **Kasiski examination** - key lengths from distances between repeated sequences
//! - **Friedman test** - index-of-coincidence estimate, used when Kasiski finds nothing
//! - **Frequency analysis** - per-column chi-squared fit against English letter frequencies
//! - **Solver** - offers ranked (key, plaintext) candidates to a validator
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{decrypt_str, encrypt_str, AnalysisConfig, EnglishFitness, Solver};
//!
//! assert_eq!(encrypt_str("attack at dawn", "lemon")?, "LXFOPVEFRNHR");
//! assert_eq!(decrypt_str("LXFOPVEFRNHR", "LEMON")?, "ATTACKATDAWN");
//!
//! let plaintext = "It was the best of times, it was the worst of times, it was the age of \
//!     wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch \
//!     of incredulity, it was the season of light, it was the season of darkness, it was \
//!     the spring of hope, it was the winter of despair.";
//! let ciphertext = encrypt_str(plaintext, "KEY")?;
//!
//! let solver = Solver::new(AnalysisConfig::default())?;
//! match solver.solve(&ciphertext, &mut EnglishFitness::default()) {
//!     Ok(candidate) => println!("{} -> {}", candidate.key, candidate.plaintext),
//!     Err(err) => println!("{}", err),
//! }
//! # Ok::<(), vigenere_analysis::VigenereError>(())
//! ```

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod config;
pub mod error;
pub mod language;
pub mod solver;

// Re-exports for easy access
pub use alphabet::{Key, Letter, NormalizedText};
pub use analysis::{CandidateSource, KeyLengthCandidate};
pub use cipher::{decrypt, decrypt_str, encrypt, encrypt_str};
pub use config::AnalysisConfig;
pub use error::{Result, VigenereError};
pub use language::{LanguageProfile, ENGLISH};
pub use solver::{AcceptAll, CandidateValidator, DecryptionCandidate, EnglishFitness, Solver};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
