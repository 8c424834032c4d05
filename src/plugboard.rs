//! Plugboard: symmetric pairwise swap applied before and after the scrambler.
//!
//! The plugboard (Steckerbrett) holds a partial pairing over the signal
//! space. Each signal takes part in at most one pair; both directions of a
//! pair are stored so a lookup is a single map access.

use std::collections::BTreeMap;

use crate::error::{EnigmaError, Result};

/// Symmetric partial pairing of signals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    pairs: BTreeMap<usize, usize>,
}

impl Plugboard {
    /// Creates an empty plugboard; every signal maps to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects `a` and `b` with a cable.
    ///
    /// Both directions are established or neither is.
    ///
    /// # Errors
    /// Returns [`EnigmaError::AlreadyPlugged`] if `a` or `b` is already part
    /// of a pair, including a pair with each other.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Plugboard;
    ///
    /// let mut plugboard = Plugboard::new();
    /// plugboard.plug(0, 1).unwrap();
    /// assert_eq!(plugboard.apply(1), 0);
    /// assert!(plugboard.plug(1, 5).is_err());
    /// ```
    pub fn plug(&mut self, a: usize, b: usize) -> Result<()> {
        for signal in [a, b] {
            if let Some(&partner) = self.pairs.get(&signal) {
                return Err(EnigmaError::AlreadyPlugged { signal, partner });
            }
        }
        self.pairs.insert(a, b);
        self.pairs.insert(b, a);
        Ok(())
    }

    /// Removes the cable attached to `a`, freeing both ends.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotPlugged`] if `a` has no pair.
    pub fn unplug(&mut self, a: usize) -> Result<()> {
        let b = self
            .pairs
            .remove(&a)
            .ok_or(EnigmaError::NotPlugged { signal: a })?;
        self.pairs.remove(&b);
        Ok(())
    }

    /// Maps a signal through the plugboard.
    pub fn apply(&self, signal: usize) -> usize {
        self.partner(signal).unwrap_or(signal)
    }

    /// The signal `a` is paired with, if any.
    pub fn partner(&self, a: usize) -> Option<usize> {
        self.pairs.get(&a).copied()
    }

    pub fn is_plugged(&self, a: usize) -> bool {
        self.pairs.contains_key(&a)
    }

    /// Every pair once, lower signal first, in ascending order.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.pairs
            .iter()
            .filter(|(&a, &b)| a <= b)
            .map(|(&a, &b)| (a, b))
            .collect()
    }

    /// Number of cables.
    pub fn len(&self) -> usize {
        self.pairs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Removes every cable.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}
