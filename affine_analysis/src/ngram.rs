//! N-gram counting restricted to an alphabet
//!
//! Adjacency is positional: an n-gram is a window of consecutive characters of
//! the original text, and a window containing any foreign character is skipped.
//! A space or punctuation mark therefore breaks n-gram continuity.

use std::collections::HashMap;

use log::debug;

use crate::alphabet::Alphabet;
use crate::error::{AnalysisError, Result};
use crate::frequency::{self, FrequencyTable};

/// Per-symbol occurrence counts, indexed by alphabet position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCounts {
    counts: Vec<usize>,
    total: usize,
}

impl CharacterCounts {
    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.total
    }

    /// Probability of every alphabet symbol, zero counts included, in alphabet order
    pub fn to_frequencies(&self, alphabet: &Alphabet) -> Result<FrequencyTable> {
        let entries = alphabet
            .symbols()
            .iter()
            .zip(&self.counts)
            .map(|(symbol, &count)| (symbol.to_string(), count));
        frequency::to_frequencies(entries, self.total)
    }
}

/// Occurrence counts of n-grams of a single order, keyed by normalized n-gram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramCounts {
    order: usize,
    counts: HashMap<String, usize>,
    total: usize,
}

impl NgramCounts {
    /// Window size: 2 for bigrams, 3 for trigrams
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn get(&self, ngram: &str) -> usize {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// Number of tallied windows
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct n-grams seen
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Largest count of any single n-gram
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Probability of each observed n-gram, in no particular order
    pub fn to_frequencies(&self) -> Result<FrequencyTable> {
        frequency::to_frequencies(
            self.counts.iter().map(|(ngram, &count)| (ngram.clone(), count)),
            self.total,
        )
    }
}

/// Count every in-alphabet character of `text`
pub fn count_characters(text: &str, alphabet: &Alphabet) -> CharacterCounts {
    let mut counts = vec![0usize; alphabet.len()];

    for ch in text.chars() {
        if let Some(index) = alphabet.index_of(ch) {
            counts[index] += 1;
        }
    }

    let total = counts.iter().sum();
    CharacterCounts { counts, total }
}

/// Count overlapping pairs of adjacent alphabet characters
///
/// # Errors
///
/// [`AnalysisError::InsufficientLength`] if `text` has fewer than 2 characters
pub fn count_bigrams(text: &str, alphabet: &Alphabet) -> Result<NgramCounts> {
    count_ngrams(text, alphabet, 2)
}

/// Count overlapping triples of adjacent alphabet characters
///
/// # Errors
///
/// [`AnalysisError::InsufficientLength`] if `text` has fewer than 3 characters
pub fn count_trigrams(text: &str, alphabet: &Alphabet) -> Result<NgramCounts> {
    count_ngrams(text, alphabet, 3)
}

fn count_ngrams(text: &str, alphabet: &Alphabet, order: usize) -> Result<NgramCounts> {
    let chars: Vec<char> = text.chars().map(|ch| alphabet.normalize(ch)).collect();
    if chars.len() < order {
        return Err(AnalysisError::InsufficientLength {
            order,
            length: chars.len(),
        });
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for window in chars.windows(order) {
        if window.iter().all(|&ch| alphabet.contains(ch)) {
            *counts.entry(window.iter().collect()).or_insert(0) += 1;
            total += 1;
        }
    }

    debug!(
        "Counted {} {}-grams ({} distinct) over {} characters",
        total,
        order,
        counts.len(),
        chars.len()
    );

    Ok(NgramCounts {
        order,
        counts,
        total,
    })
}

/// Square matrix of bigram counts scaled by the largest bigram count.
///
/// Row `i` is the first symbol, column `j` the second, both in alphabet order.
/// Every cell is zero when no bigram was counted.
pub fn bigram_matrix(bigrams: &NgramCounts, alphabet: &Alphabet) -> Vec<Vec<f64>> {
    let max_count = bigrams.max_count();
    let symbols = alphabet.symbols();

    symbols
        .iter()
        .map(|&first| {
            symbols
                .iter()
                .map(|&second| {
                    if max_count == 0 {
                        return 0.0;
                    }
                    let bigram: String = [first, second].iter().collect();
                    bigrams.get(&bigram) as f64 / max_count as f64
                })
                .collect()
        })
        .collect()
}
