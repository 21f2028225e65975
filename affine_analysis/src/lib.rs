//! # Affine Analysis Library
//!
//! Frequency analysis and affine cipher cryptanalysis over a configurable alphabet.
//!
//! ## Components
//!
//! - **Alphabet** - maps configured symbols to positions, optionally case insensitive
//! - **N-grams** - character, bigram and trigram counts; foreign characters break adjacency
//! - **Frequencies** - probabilities, ranking with a pluggable tie-break order, truncation
//! - **Affine cipher** - `E(x) = (a * x + b) mod m`, case and foreign characters preserved
//! - **Cryptanalysis** - recovers `(a, b)` by matching the two most frequent symbols
//!   of a baseline text with those of the ciphertext
//!
//! ## Usage
//!
//! ```rust
//! use affine_analysis::{AffineKey, Alphabet, affine, cryptanalysis};
//!
//! let alphabet = Alphabet::build(affine_analysis::ENGLISH_ALPHABET, false)?;
//! let plaintext = "Meet me here, the street sweeper sees the tree.";
//! let key = AffineKey::new(5, 8);
//!
//! let ciphertext = affine::encrypt(plaintext, &alphabet, key)?;
//! assert_eq!(affine::decrypt(&ciphertext, &alphabet, key)?, plaintext);
//!
//! // Recover the key using the plaintext itself as the baseline
//! let recovery = cryptanalysis::recover_and_decrypt(plaintext, &ciphertext, &alphabet)?;
//! assert_eq!(recovery.key, key);
//! assert_eq!(recovery.plaintext, plaintext);
//! # Ok::<(), affine_analysis::AnalysisError>(())
//! ```

// Public modules
pub mod affine;
pub mod alphabet;
pub mod analyzer;
pub mod cryptanalysis;
pub mod error;
pub mod frequency;
pub mod ngram;

// Re-exports for easy access
pub use affine::{AffineKey, Direction};
pub use alphabet::{Alphabet, ENGLISH_ALPHABET, UKRAINIAN_ALPHABET};
pub use analyzer::{Analyzer, AnalyzerConfig, NgramReport, TextAnalysis, DEFAULT_NGRAM_LIMIT};
pub use cryptanalysis::Recovery;
pub use error::{AnalysisError, Result};
pub use frequency::{FrequencyEntry, FrequencyTable};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    const UKRAINIAN_SAMPLE: &str = "Він іде по стежці до річки, а вітер несе пісню понад водою. \
                                    Навесні вода тече швидко, і ми стоїмо на березі та слухаємо.";

    #[test]
    fn test_ukrainian_round_trip() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let key = AffineKey::new(4, 17);

        let ciphertext = analyzer.encrypt(UKRAINIAN_SAMPLE, key).unwrap();
        assert_ne!(ciphertext, UKRAINIAN_SAMPLE);
        assert!(ciphertext.starts_with(|c: char| c.is_uppercase()));
        assert_eq!(analyzer.decrypt(&ciphertext, key).unwrap(), UKRAINIAN_SAMPLE);
    }

    #[test]
    fn test_ukrainian_crack() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let key = AffineKey::new(4, 17);
        let ciphertext = analyzer.encrypt(UKRAINIAN_SAMPLE, key).unwrap();

        let recovery = analyzer.crack(UKRAINIAN_SAMPLE, &ciphertext).unwrap();
        assert_eq!(recovery.key, key);
        assert_eq!(recovery.plaintext, UKRAINIAN_SAMPLE);
    }

    #[test]
    fn test_analysis_of_ciphertext_matches_plaintext_profile() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let key = AffineKey::new(2, 5);
        let ciphertext = analyzer.encrypt(UKRAINIAN_SAMPLE, key).unwrap();

        let plain = analyzer.analyze(UKRAINIAN_SAMPLE).unwrap();
        let cipher = analyzer.analyze(&ciphertext).unwrap();

        let plain_probabilities: Vec<f64> = plain.characters.iter().map(|e| e.probability).collect();
        let cipher_probabilities: Vec<f64> = cipher.characters.iter().map(|e| e.probability).collect();
        assert_eq!(plain_probabilities, cipher_probabilities);
        assert_eq!(plain.bigrams.unwrap().total, cipher.bigrams.unwrap().total);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
