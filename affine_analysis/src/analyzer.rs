//! Configured analysis engine
//!
//! An [`Analyzer`] holds the active [`Alphabet`] as a shared snapshot. Changing
//! the configuration builds a new alphabet and swaps the snapshot; a failed
//! rebuild leaves the previous alphabet in place.

use std::sync::Arc;

use log::{debug, warn};

use crate::affine::{self, AffineKey};
use crate::alphabet::{Alphabet, UKRAINIAN_ALPHABET};
use crate::cryptanalysis::{self, Recovery};
use crate::error::{AnalysisError, Result};
use crate::frequency::{self, FrequencyTable};
use crate::ngram::{self, NgramCounts};

/// Default number of n-grams kept in a report
pub const DEFAULT_NGRAM_LIMIT: usize = 30;

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Alphabet symbols in index order
    pub alphabet: String,
    pub case_sensitive: bool,
    /// Maximum number of bigrams and trigrams kept in a report
    pub ngram_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            alphabet: UKRAINIAN_ALPHABET.to_string(),
            case_sensitive: false,
            ngram_limit: DEFAULT_NGRAM_LIMIT,
        }
    }
}

/// Ranked n-gram frequencies of one order
#[derive(Debug, Clone, PartialEq)]
pub struct NgramReport {
    pub order: usize,
    /// Number of n-grams counted
    pub total: usize,
    pub frequencies: FrequencyTable,
}

/// Full frequency analysis of a text
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    /// Every alphabet symbol in collation order
    pub characters_by_symbol: FrequencyTable,
    /// Every alphabet symbol ranked by frequency
    pub characters: FrequencyTable,
    pub bigrams: Option<NgramReport>,
    pub trigrams: Option<NgramReport>,
    /// Bigram counts scaled by the largest one, rows = first symbol
    pub bigram_matrix: Option<Vec<Vec<f64>>>,
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    alphabet: Arc<Alphabet>,
}

impl Analyzer {
    /// Create an analyzer, building its alphabet from `config`
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let alphabet = Arc::new(Alphabet::build(&config.alphabet, config.case_sensitive)?);
        Ok(Self { config, alphabet })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Snapshot of the active alphabet
    pub fn alphabet(&self) -> Arc<Alphabet> {
        Arc::clone(&self.alphabet)
    }

    /// Replace the alphabet. On error the current alphabet and configuration are kept.
    pub fn reconfigure(&mut self, symbols: &str, case_sensitive: bool) -> Result<Arc<Alphabet>> {
        let alphabet = Alphabet::build(symbols, case_sensitive)?;
        debug!("Alphabet reconfigured to \"{}\"", alphabet.as_string());

        self.alphabet = Arc::new(alphabet);
        self.config.alphabet = symbols.to_string();
        self.config.case_sensitive = case_sensitive;
        Ok(self.alphabet())
    }

    /// Character, bigram and trigram frequencies of `text`
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::EmptyText`] if `text` is empty
    /// * [`AnalysisError::EmptyDistribution`] if no alphabet character occurs in `text`
    pub fn analyze(&self, text: &str) -> Result<TextAnalysis> {
        if text.is_empty() {
            return Err(AnalysisError::EmptyText);
        }
        let alphabet = self.alphabet.as_ref();
        let collate = |l: &str, r: &str| alphabet.collate(l, r);

        let characters = ngram::count_characters(text, alphabet).to_frequencies(alphabet)?;
        let characters_by_symbol = frequency::sort_by_symbol(characters.clone(), collate);
        let characters = frequency::rank_and_truncate(characters, alphabet.len(), collate);

        let bigram_counts = section(ngram::count_bigrams(text, alphabet))?;
        let bigram_matrix = bigram_counts
            .as_ref()
            .map(|counts| ngram::bigram_matrix(counts, alphabet));
        let bigrams = bigram_counts.map(|counts| self.report(&counts)).transpose()?;
        let trigrams = section(ngram::count_trigrams(text, alphabet))?
            .map(|counts| self.report(&counts))
            .transpose()?;

        Ok(TextAnalysis {
            characters_by_symbol,
            characters,
            bigrams,
            trigrams,
            bigram_matrix,
        })
    }

    fn report(&self, counts: &NgramCounts) -> Result<NgramReport> {
        let alphabet = self.alphabet.as_ref();
        let frequencies = frequency::rank_and_truncate(
            counts.to_frequencies()?,
            self.config.ngram_limit,
            |l, r| alphabet.collate(l, r),
        );
        Ok(NgramReport {
            order: counts.order(),
            total: counts.total(),
            frequencies,
        })
    }

    pub fn encrypt(&self, text: &str, key: AffineKey) -> Result<String> {
        affine::encrypt(text, &self.alphabet, key)
    }

    pub fn decrypt(&self, text: &str, key: AffineKey) -> Result<String> {
        affine::decrypt(text, &self.alphabet, key)
    }

    /// Recover the key of `ciphertext` using `baseline` as the reference language sample
    pub fn crack(&self, baseline: &str, ciphertext: &str) -> Result<Recovery> {
        cryptanalysis::recover_and_decrypt(baseline, ciphertext, &self.alphabet)
    }
}

/// Turn a too short text or an n-gram order with no occurrences into a skipped section
fn section(counts: Result<NgramCounts>) -> Result<Option<NgramCounts>> {
    match counts {
        Ok(counts) if counts.total() == 0 => {
            warn!("Text contains no {}-grams of alphabet characters", counts.order());
            Ok(None)
        }
        Ok(counts) => Ok(Some(counts)),
        Err(err @ AnalysisError::InsufficientLength { .. }) => {
            warn!("{}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ENGLISH_ALPHABET;

    fn english() -> Analyzer {
        Analyzer::new(AnalyzerConfig {
            alphabet: ENGLISH_ALPHABET.to_string(),
            case_sensitive: false,
            ngram_limit: 3,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        assert_eq!(analyzer.alphabet().len(), 33);
        assert!(!analyzer.alphabet().is_case_sensitive());
        assert_eq!(analyzer.config().ngram_limit, DEFAULT_NGRAM_LIMIT);
    }

    #[test]
    fn test_reconfigure_keeps_previous_alphabet_on_error() {
        let mut analyzer = english();
        let before = analyzer.alphabet();

        let result = analyzer.reconfigure("abcA", false);
        assert!(matches!(result, Err(AnalysisError::DuplicateSymbol { .. })));
        assert_eq!(analyzer.alphabet(), before);
        assert_eq!(analyzer.config().alphabet, ENGLISH_ALPHABET);
    }

    #[test]
    fn test_reconfigure_swaps_snapshot() {
        let mut analyzer = english();
        let before = analyzer.alphabet();

        let after = analyzer.reconfigure("XYZ", false).unwrap();
        assert_eq!(after.as_string(), "xyz");
        assert_eq!(before.len(), 26);
        assert!(!Arc::ptr_eq(&before, &analyzer.alphabet()));
    }

    #[test]
    fn test_analyze() {
        let analysis = english().analyze("abab, ba!").unwrap();

        assert_eq!(analysis.characters.len(), 26);
        assert_eq!(analysis.characters[0].symbol, "a");
        assert_eq!(analysis.characters[0].probability, 0.5);
        assert_eq!(analysis.characters[2].symbol, "c");
        assert_eq!(analysis.characters_by_symbol[1].symbol, "b");

        let bigrams = analysis.bigrams.unwrap();
        assert_eq!(bigrams.total, 4);
        assert_eq!(bigrams.frequencies[0].symbol, "ab");
        assert_eq!(bigrams.frequencies[1].symbol, "ba");

        let trigrams = analysis.trigrams.unwrap();
        assert_eq!(trigrams.total, 2);
        assert_eq!(trigrams.frequencies.len(), 2);

        let matrix = analysis.bigram_matrix.unwrap();
        assert_eq!(matrix.len(), 26);
        assert_eq!(matrix[0][1], 1.0);
        assert_eq!(matrix[1][0], 1.0);
    }

    #[test]
    fn test_analyze_truncates_ngrams() {
        let analysis = english().analyze("abcdefgh").unwrap();
        assert_eq!(analysis.bigrams.unwrap().frequencies.len(), 3);
        assert_eq!(analysis.trigrams.unwrap().frequencies[0].symbol, "abc");
    }

    #[test]
    fn test_analyze_short_text_skips_sections() {
        let analysis = english().analyze("a").unwrap();
        assert_eq!(analysis.characters[0].probability, 1.0);
        assert!(analysis.bigrams.is_none());
        assert!(analysis.trigrams.is_none());
        assert!(analysis.bigram_matrix.is_none());

        let analysis = english().analyze("a b").unwrap();
        assert!(analysis.bigrams.is_none());
    }

    #[test]
    fn test_analyze_errors() {
        assert_eq!(english().analyze(""), Err(AnalysisError::EmptyText));
        assert_eq!(english().analyze("123"), Err(AnalysisError::EmptyDistribution));
    }

    #[test]
    fn test_encrypt_then_crack() {
        let analyzer = english();
        let baseline = "see the tree, meet the trees: three settees set there";
        let ciphertext = analyzer.encrypt(baseline, AffineKey::new(7, 3)).unwrap();

        assert_eq!(analyzer.decrypt(&ciphertext, AffineKey::new(7, 3)).unwrap(), baseline);
        let recovery = analyzer.crack(baseline, &ciphertext).unwrap();
        assert_eq!(recovery.key, AffineKey::new(7, 3));
        assert_eq!(recovery.plaintext, baseline);
    }
}
