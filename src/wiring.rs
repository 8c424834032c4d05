//! Wiring: immutable permutation table shared by rotor instances.
//!
//! A [`Wiring`] holds the forward permutation of a rotor, its precomputed
//! inverse and its turnover notches. Tables never change after construction,
//! so rotors hold them behind an [`Arc`](std::sync::Arc) and any number of
//! machines can read the same table from different threads.

use crate::error::{EnigmaError, Result};
use crate::utils::alphabet::Alphabet;

/// Permutation table of one rotor or reflector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring {
    forward: Vec<usize>,
    inverse: Vec<usize>,
    notches: Vec<usize>,
}

impl Wiring {
    /// Creates a wiring table from a permutation of `0..N` and a notch list.
    ///
    /// Duplicate notches are collapsed; the stored notch list is sorted.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiring`] if `forward` has fewer than two
    ///   contacts or is not a bijection on `0..N`.
    /// - [`EnigmaError::SignalOutOfRange`] if a notch is not in `0..N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Wiring;
    ///
    /// let wiring = Wiring::new(vec![1, 2, 0], vec![2]).unwrap();
    /// assert_eq!(wiring.inverse_at(0), 2);
    /// assert!(Wiring::new(vec![0, 0, 1], vec![]).is_err());
    /// ```
    pub fn new(forward: Vec<usize>, notches: Vec<usize>) -> Result<Self> {
        let size = forward.len();
        if size < 2 {
            return Err(EnigmaError::InvalidWiring {
                reason: format!("need at least 2 contacts, got {}", size),
            });
        }

        let mut inverse = vec![usize::MAX; size];
        for (contact, &target) in forward.iter().enumerate() {
            if target >= size {
                return Err(EnigmaError::InvalidWiring {
                    reason: format!(
                        "contact {} is wired to {}, outside 0..{}",
                        contact, target, size
                    ),
                });
            }
            if inverse[target] != usize::MAX {
                return Err(EnigmaError::InvalidWiring {
                    reason: format!(
                        "contacts {} and {} are both wired to {}",
                        inverse[target], contact, target
                    ),
                });
            }
            inverse[target] = contact;
        }

        let mut notches = notches;
        if let Some(&bad) = notches.iter().find(|&&n| n >= size) {
            return Err(EnigmaError::SignalOutOfRange { signal: bad, size });
        }
        notches.sort_unstable();
        notches.dedup();

        Ok(Wiring {
            forward,
            inverse,
            notches,
        })
    }

    /// Creates a wiring table from letter notation, e.g. `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"`
    /// with notches `"Q"`.
    ///
    /// # Errors
    /// - [`EnigmaError::SizeMismatch`] if `coding` does not have one letter
    ///   per alphabet position.
    /// - [`EnigmaError::UnknownLetter`] for letters outside the alphabet.
    /// - Anything [`Wiring::new`] reports.
    pub fn from_letters(alphabet: &Alphabet, coding: &str, notches: &str) -> Result<Self> {
        let forward = alphabet.indices(coding)?;
        if forward.len() != alphabet.len() {
            return Err(EnigmaError::SizeMismatch {
                expected: alphabet.len(),
                actual: forward.len(),
            });
        }
        let notches = alphabet.indices(notches)?;
        Self::new(forward, notches)
    }

    /// Number of contacts (alphabet size N).
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Contact reached when entering at `contact` with no offset.
    ///
    /// # Panics
    /// Panics if `contact >= size()`.
    pub fn forward_at(&self, contact: usize) -> usize {
        self.forward[contact]
    }

    /// Contact that [`forward_at`](Self::forward_at) maps onto `contact`.
    ///
    /// # Panics
    /// Panics if `contact >= size()`.
    pub fn inverse_at(&self, contact: usize) -> usize {
        self.inverse[contact]
    }

    /// Sorted turnover notch positions.
    pub fn notches(&self) -> &[usize] {
        &self.notches
    }

    /// Whether `position` carries a notch.
    pub fn has_notch(&self, position: usize) -> bool {
        self.notches.binary_search(&position).is_ok()
    }

    /// Whether the permutation is its own inverse, which a reflector needs
    /// for the machine to be self-reciprocal.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Whether some contact is wired to itself.
    pub fn has_fixed_point(&self) -> bool {
        self.forward.iter().enumerate().any(|(i, &t)| i == t)
    }
}
