//! Frequency tables: counts to probabilities, ranking and truncation

use std::cmp::Ordering;

use crate::error::{AnalysisError, Result};

/// A symbol or n-gram together with its relative frequency
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEntry {
    pub symbol: String,
    pub probability: f64,
}

pub type FrequencyTable = Vec<FrequencyEntry>;

/// Convert `(symbol, count)` pairs into probabilities `count / total`
///
/// # Errors
///
/// [`AnalysisError::EmptyDistribution`] if `total` is zero
pub fn to_frequencies<I, S>(counts: I, total: usize) -> Result<FrequencyTable>
where
    I: IntoIterator<Item = (S, usize)>,
    S: Into<String>,
{
    if total == 0 {
        return Err(AnalysisError::EmptyDistribution);
    }

    Ok(counts
        .into_iter()
        .map(|(symbol, count)| FrequencyEntry {
            symbol: symbol.into(),
            probability: count as f64 / total as f64,
        })
        .collect())
}

/// Sort descending by probability, ties ordered by `tiebreak`, and keep at
/// most `limit` entries.
pub fn rank_and_truncate<F>(mut table: FrequencyTable, limit: usize, tiebreak: F) -> FrequencyTable
where
    F: Fn(&str, &str) -> Ordering,
{
    table.sort_by(|left, right| {
        right
            .probability
            .total_cmp(&left.probability)
            .then_with(|| tiebreak(&left.symbol, &right.symbol))
    });
    table.truncate(limit);
    table
}

/// Sort by symbol only, as used for the alphabetical character chart
pub fn sort_by_symbol<F>(mut table: FrequencyTable, order: F) -> FrequencyTable
where
    F: Fn(&str, &str) -> Ordering,
{
    table.sort_by(|left, right| order(&left.symbol, &right.symbol));
    table
}

/// Plain code point order
pub fn lexical(left: &str, right: &str) -> Ordering {
    left.cmp(right)
}
