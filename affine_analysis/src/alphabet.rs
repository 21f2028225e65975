//! Alphabet index: a bijection between configured symbols and positions `0..m`

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use crate::error::{AnalysisError, Result};

/// Ukrainian alphabet, the default analysis alphabet
pub const UKRAINIAN_ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Basic Latin alphabet
pub const ENGLISH_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// An ordered set of unique symbols, each mapped to its position.
///
/// Symbols are stored in normalized form: lowercased when the alphabet is
/// case insensitive, as given otherwise. An `Alphabet` is never modified after
/// [`Alphabet::build`]; a configuration change produces a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
    case_sensitive: bool,
}

impl Alphabet {
    /// Build an alphabet from `symbols` in the given order
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::EmptyAlphabet`] if `symbols` is empty
    /// * [`AnalysisError::DuplicateSymbol`] if two symbols normalize to the same character
    ///
    /// # Example
    ///
    /// ```rust
    /// use affine_analysis::{Alphabet, AnalysisError};
    ///
    /// let alphabet = Alphabet::build("ABC", false)?;
    /// assert_eq!(alphabet.as_string(), "abc");
    ///
    /// assert!(matches!(
    ///     Alphabet::build("Aa", false),
    ///     Err(AnalysisError::DuplicateSymbol { .. })
    /// ));
    /// # Ok::<(), AnalysisError>(())
    /// ```
    pub fn build(symbols: &str, case_sensitive: bool) -> Result<Self> {
        let mut normalized: Vec<char> = Vec::new();
        let mut index: HashMap<char, usize> = HashMap::new();

        for (position, ch) in symbols.chars().enumerate() {
            let symbol = normalize(ch, case_sensitive);
            if let Some(&first) = index.get(&symbol) {
                return Err(AnalysisError::DuplicateSymbol {
                    symbol,
                    first,
                    second: position,
                });
            }
            index.insert(symbol, position);
            normalized.push(symbol);
        }

        if normalized.is_empty() {
            return Err(AnalysisError::EmptyAlphabet);
        }

        debug!(
            "Built alphabet of {} symbols (case sensitive: {})",
            normalized.len(),
            case_sensitive
        );

        Ok(Self {
            symbols: normalized,
            index,
            case_sensitive,
        })
    }

    /// Number of symbols, `m`
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false, an alphabet holds at least one symbol
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Normalized symbols in index order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol stored at `index`
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The normalized alphabet, as it should be shown to the user
    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }

    /// Apply this alphabet's case rule to a character
    pub fn normalize(&self, ch: char) -> char {
        normalize(ch, self.case_sensitive)
    }

    /// Position of `ch` after normalization, `None` for foreign characters
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.index.get(&self.normalize(ch)).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index_of(ch).is_some()
    }

    /// Collation order over strings: symbol by symbol by alphabet position,
    /// foreign characters sorting after every symbol (by code point).
    pub fn collate(&self, left: &str, right: &str) -> Ordering {
        let key = |ch: char| match self.index_of(ch) {
            Some(index) => (0u8, index as u32),
            None => (1u8, ch as u32),
        };
        left.chars().map(key).cmp(right.chars().map(key))
    }
}

/// Lowercase `ch` unless case sensitive. Characters whose lowercase form is
/// not a single character are kept as they are.
pub(crate) fn normalize(ch: char, case_sensitive: bool) -> char {
    if case_sensitive {
        return ch;
    }
    single(ch.to_lowercase()).unwrap_or(ch)
}

/// Uppercase form of `ch` when it is a single character
pub(crate) fn to_upper(ch: char) -> char {
    single(ch.to_uppercase()).unwrap_or(ch)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_assigns_sequential_indices() {
        let alphabet = Alphabet::build("xyz", true).unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.index_of('x'), Some(0));
        assert_eq!(alphabet.index_of('z'), Some(2));
        assert_eq!(alphabet.symbol(1), Some('y'));
        assert_eq!(alphabet.symbol(3), None);
    }

    #[test]
    fn test_case_insensitive_normalizes_symbols() {
        let alphabet = Alphabet::build("AbC", false).unwrap();
        assert_eq!(alphabet.as_string(), "abc");
        assert_eq!(alphabet.index_of('B'), Some(1));
        assert_eq!(alphabet.index_of('c'), Some(2));
    }

    #[test]
    fn test_case_sensitive_keeps_case() {
        let alphabet = Alphabet::build("Aa", true).unwrap();
        assert_eq!(alphabet.as_string(), "Aa");
        assert_eq!(alphabet.index_of('A'), Some(0));
        assert_eq!(alphabet.index_of('a'), Some(1));
    }

    #[test]
    fn test_duplicate_after_folding() {
        let result = Alphabet::build("Aa", false);
        assert_eq!(
            result,
            Err(AnalysisError::DuplicateSymbol {
                symbol: 'a',
                first: 0,
                second: 1
            })
        );
    }

    #[test]
    fn test_duplicate_case_sensitive() {
        assert!(matches!(
            Alphabet::build("abca", true),
            Err(AnalysisError::DuplicateSymbol { symbol: 'a', .. })
        ));
    }

    #[test]
    fn test_empty_alphabet() {
        assert_eq!(Alphabet::build("", false), Err(AnalysisError::EmptyAlphabet));
    }

    #[test]
    fn test_ukrainian_alphabet() {
        let alphabet = Alphabet::build(UKRAINIAN_ALPHABET, false).unwrap();
        assert_eq!(alphabet.len(), 33);
        assert_eq!(alphabet.index_of('Ґ'), Some(4));
        assert_eq!(alphabet.index_of('Я'), Some(32));
        assert!(!alphabet.contains('q'));
    }

    #[test]
    fn test_collate_follows_alphabet_order() {
        let alphabet = Alphabet::build("cba", true).unwrap();
        assert_eq!(alphabet.collate("c", "a"), Ordering::Less);
        assert_eq!(alphabet.collate("ab", "aa"), Ordering::Less);
        assert_eq!(alphabet.collate("a", "a!"), Ordering::Less);
        assert_eq!(alphabet.collate("a!", "ab"), Ordering::Greater);
        assert_eq!(alphabet.collate("ba", "ba"), Ordering::Equal);
    }
}
