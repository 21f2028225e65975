//! Error types for alphabet, counting, cipher and key recovery operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Alphabet contains identical characters: '{symbol}' at positions {first} and {second} (if not case sensitive, check that the same letter is not given in both cases)")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },

    #[error("Alphabet is empty")]
    EmptyAlphabet,

    #[error("Text of length {length} is too short to contain any {order}-grams")]
    InsufficientLength { order: usize, length: usize },

    #[error("No alphabet characters found, frequencies are undefined")]
    EmptyDistribution,

    #[error("Text is empty, nothing to analyze")]
    EmptyText,

    #[error("Affine multiplier {a} is not coprime with alphabet size {m}")]
    InvalidKey { a: i64, m: usize },

    #[error("Baseline is too short to perform auto-decrypt")]
    InsufficientBaseline,

    #[error("Ciphertext is too short to perform auto-decrypt")]
    InsufficientCiphertext,

    #[error("No affine key maps the baseline's dominant symbols onto the ciphertext's")]
    NoKeyFound,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
