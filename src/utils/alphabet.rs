//! Letter-to-signal conversion.
//!
//! An [`Alphabet`] maps characters to signal indices and back. Lookups are
//! case-insensitive; the reverse mapping always yields the alphabet's own
//! (canonical) character.

use crate::error::{EnigmaError, Result};

/// Letters of the historical keyboard, in signal order.
pub const DEFAULT_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Ordered set of distinct characters defining the signal space `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            letters: DEFAULT_LETTERS.chars().collect(),
        }
    }
}

impl Alphabet {
    /// Builds an alphabet from a string of letters.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidAlphabet`] if fewer than two letters are
    /// given or if two letters are equal ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Alphabet;
    ///
    /// let digits = Alphabet::new("0123456789").unwrap();
    /// assert_eq!(digits.len(), 10);
    /// assert!(Alphabet::new("aA").is_err());
    /// ```
    pub fn new(letters: &str) -> Result<Self> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.len() < 2 {
            return Err(EnigmaError::InvalidAlphabet {
                reason: format!("need at least 2 letters, got {}", letters.len()),
            });
        }
        for (i, &a) in letters.iter().enumerate() {
            if letters[i + 1..].iter().any(|&b| same_letter(a, b)) {
                return Err(EnigmaError::InvalidAlphabet {
                    reason: format!("letter {:?} appears more than once", a),
                });
            }
        }
        Ok(Alphabet { letters })
    }

    /// Number of letters, i.e. the alphabet size N.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: an alphabet holds at least two letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the signal index of `letter`, ignoring case.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownLetter`] if the letter is not present.
    pub fn index_of(&self, letter: char) -> Result<usize> {
        self.letters
            .iter()
            .position(|&l| same_letter(l, letter))
            .ok_or(EnigmaError::UnknownLetter(letter))
    }

    /// Returns the letter for signal `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SignalOutOfRange`] if `index >= len()`.
    pub fn letter(&self, index: usize) -> Result<char> {
        self.letters
            .get(index)
            .copied()
            .ok_or(EnigmaError::SignalOutOfRange {
                signal: index,
                size: self.letters.len(),
            })
    }

    /// Converts every character of `text` into its signal index.
    pub fn indices(&self, text: &str) -> Result<Vec<usize>> {
        text.chars().map(|c| self.index_of(c)).collect()
    }

    /// Converts signal indices back into a string.
    pub fn text(&self, signals: &[usize]) -> Result<String> {
        signals.iter().map(|&s| self.letter(s)).collect()
    }
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
