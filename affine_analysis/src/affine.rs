//! Affine substitution cipher over an alphabet
//!
//! A symbol at index `x` encrypts to `(a * x + b) mod m` and decrypts with
//! `a_inv * (y - b) mod m`. Foreign characters pass through unchanged.

use crate::alphabet::{self, Alphabet};
use crate::error::{AnalysisError, Result};

/// Affine key `(a, b)`. Both parts are reduced modulo the alphabet size when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    pub a: i64,
    pub b: i64,
}

impl AffineKey {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// Key with both parts reduced into `0..m`
    pub fn reduced(&self, m: usize) -> Self {
        let m = m as i64;
        Self {
            a: self.a.rem_euclid(m),
            b: self.b.rem_euclid(m),
        }
    }

    /// Whether the multiplier is invertible modulo `m`
    pub fn is_valid(&self, m: usize) -> bool {
        is_valid(self.a.rem_euclid(m as i64) as usize, m)
    }
}

/// Direction of an affine transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Greatest common divisor
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// `a` is a usable multiplier iff `gcd(a, m) = 1`
pub fn is_valid(a: usize, m: usize) -> bool {
    gcd(a, m) == 1
}

/// Modular multiplicative inverse of `a` modulo `m`, by linear search over `1..m`.
///
/// Returns `None` when `a` is not invertible. Modulo 1 every value is congruent,
/// so the inverse is taken as 0.
pub fn mod_inverse(a: usize, m: usize) -> Option<usize> {
    if m == 1 {
        return Some(0);
    }
    let a = a % m;
    (1..m).find(|&k| (a * k) % m == 1)
}

/// Apply the affine cipher to every alphabet character of `text`
///
/// If the alphabet is case insensitive, upper case characters produce upper
/// case results. A case sensitive alphabet emits its stored symbols unchanged.
///
/// # Errors
///
/// [`AnalysisError::InvalidKey`] if `key.a` is not coprime with the alphabet size
pub fn transform(text: &str, alphabet: &Alphabet, key: AffineKey, direction: Direction) -> Result<String> {
    let m = alphabet.len();
    let AffineKey { a, b } = key.reduced(m);
    let a = a as usize;
    let b = b as usize;

    if !is_valid(a, m) {
        return Err(AnalysisError::InvalidKey { a: key.a, m });
    }

    let substitute: Box<dyn Fn(usize) -> usize> = match direction {
        Direction::Encrypt => Box::new(move |x| (a * x + b) % m),
        Direction::Decrypt => {
            let a_inv = mod_inverse(a, m).ok_or(AnalysisError::InvalidKey { a: key.a, m })?;
            Box::new(move |y| (a_inv * (y + m - b)) % m)
        }
    };

    let case_sensitive = alphabet.is_case_sensitive();
    let symbols = alphabet.symbols();

    Ok(text
        .chars()
        .map(|ch| match alphabet.index_of(ch) {
            Some(index) => {
                let substituted = symbols[substitute(index)];
                if !case_sensitive && ch.is_uppercase() {
                    alphabet::to_upper(substituted)
                } else {
                    substituted
                }
            }
            None => ch,
        })
        .collect())
}

/// Encrypt `text` with `key`
pub fn encrypt(text: &str, alphabet: &Alphabet, key: AffineKey) -> Result<String> {
    transform(text, alphabet, key, Direction::Encrypt)
}

/// Decrypt `text` that was encrypted with `key`
pub fn decrypt(text: &str, alphabet: &Alphabet, key: AffineKey) -> Result<String> {
    transform(text, alphabet, key, Direction::Decrypt)
}
