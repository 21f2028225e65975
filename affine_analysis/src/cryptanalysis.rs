//! Affine key recovery by matching the two most frequent symbols
//!
//! The two dominant symbols of a baseline text (known language) are assumed
//! to encrypt to the two dominant symbols of the ciphertext:
//!
//! ```text
//! a * base_max     + b = cipher_max     (mod m)
//! a * base_pre_max + b = cipher_pre_max (mod m)
//! ```
//!
//! The first coprime `a` (ascending) that satisfies both equations is taken.
//! A success means a consistent key was found, not that it is the true key.

use log::{debug, info};

use crate::affine::{self, AffineKey};
use crate::alphabet::Alphabet;
use crate::error::{AnalysisError, Result};
use crate::ngram;

/// Result of a successful key recovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    /// Encryption key consistent with the frequency match
    pub key: AffineKey,
    pub plaintext: String,
}

/// Indices of the most and second most frequent symbols.
///
/// Indices are scanned in ascending order and an equal count never displaces
/// an occupied slot, so the first index seen wins ties. A slot is `None` only
/// when fewer than two counts are given.
pub fn two_most_frequent(counts: &[usize]) -> (Option<usize>, Option<usize>) {
    let mut primary: Option<usize> = None;
    let mut secondary: Option<usize> = None;

    for (index, &count) in counts.iter().enumerate() {
        match primary {
            Some(max) if count <= counts[max] => {
                if secondary.map_or(true, |pre_max| count > counts[pre_max]) {
                    secondary = Some(index);
                }
            }
            _ => {
                secondary = primary;
                primary = Some(index);
            }
        }
    }

    (primary, secondary)
}

/// Dominant pair of a text, `None` if the alphabet has fewer than two symbols
fn dominant_pair(counts: &[usize]) -> Option<(usize, usize)> {
    match two_most_frequent(counts) {
        (Some(max), Some(pre_max)) => Some((max, pre_max)),
        _ => None,
    }
}

/// Solve for `(a, b)` given the dominant symbol pairs of baseline and ciphertext
///
/// Searches `a` over `0..m` in ascending order, skipping multipliers that are
/// not coprime with `m`.
///
/// # Errors
///
/// [`AnalysisError::NoKeyFound`] if no coprime `a` satisfies both equations
pub fn solve_key(base: (usize, usize), cipher: (usize, usize), m: usize) -> Result<AffineKey> {
    let (base_max, base_pre_max) = base;
    let (cipher_max, cipher_pre_max) = cipher;
    let (m_i, base_max, base_pre_max) = (m as i64, base_max as i64, base_pre_max as i64);
    let (cipher_max, cipher_pre_max) = (cipher_max as i64, cipher_pre_max as i64);

    (0..m)
        .filter(|&a| affine::is_valid(a, m))
        .map(|a| a as i64)
        .find_map(|a| {
            let b = (cipher_max - a * base_max).rem_euclid(m_i);
            ((b + a * base_pre_max) % m_i == cipher_pre_max).then_some(AffineKey::new(a, b))
        })
        .ok_or(AnalysisError::NoKeyFound)
}

/// Recover the affine key of `ciphertext` from the frequency profile of
/// `baseline`, then decrypt the ciphertext with it.
///
/// # Errors
///
/// * [`AnalysisError::InsufficientBaseline`] if no second most frequent baseline symbol exists
/// * [`AnalysisError::InsufficientCiphertext`] likewise for the ciphertext
/// * [`AnalysisError::NoKeyFound`] if the dominant symbols cannot be matched by any key
pub fn recover_and_decrypt(baseline: &str, ciphertext: &str, alphabet: &Alphabet) -> Result<Recovery> {
    let base_counts = ngram::count_characters(baseline, alphabet);
    let base = dominant_pair(base_counts.as_slice()).ok_or(AnalysisError::InsufficientBaseline)?;

    let cipher_counts = ngram::count_characters(ciphertext, alphabet);
    let cipher = dominant_pair(cipher_counts.as_slice()).ok_or(AnalysisError::InsufficientCiphertext)?;

    debug!(
        "Matching baseline symbols {:?} to ciphertext symbols {:?}",
        (alphabet.symbol(base.0), alphabet.symbol(base.1)),
        (alphabet.symbol(cipher.0), alphabet.symbol(cipher.1))
    );

    let key = solve_key(base, cipher, alphabet.len())?;
    info!("Recovered affine key: a = {}, b = {}", key.a, key.b);

    let plaintext = affine::decrypt(ciphertext, alphabet, key)?;
    Ok(Recovery { key, plaintext })
}
