//! Rotor: a wired disk with a mutable rotation and a fixed ring setting.
//!
//! A [`Rotor`] pairs a shared, read-only [`Wiring`] table with the only
//! state that changes while typing: its rotation counter. The same structure
//! serves as a reflector when its [`Motion`] is [`Motion::Fixed`].
//!
//! Substitution enters the disk at a contact shifted by the rotation plus
//! the ring setting, follows the wire, and leaves at a contact shifted back
//! by the same amount. This keeps [`Rotor::forward`] and [`Rotor::backward`]
//! exact inverses for any fixed rotation and ring setting.

use std::sync::Arc;

use tracing::trace;

use crate::error::{EnigmaError, Result};
use crate::utils::alphabet::Alphabet;
use crate::utils::modular;
use crate::wiring::Wiring;

/// Whether a rotor takes part in stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    /// Advances on [`Rotor::step`] and reports notch engagement.
    #[default]
    Stepping,
    /// Never moves; rotation stays at 0 and no notch is reported.
    Fixed,
}

/// Descriptive data about a rotor. Not used by any algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trivia {
    pub name: Option<String>,
    pub model: Option<String>,
    pub year: Option<u16>,
}

/// One wired disk of the scrambler, or the reflector.
#[derive(Debug, Clone)]
pub struct Rotor {
    wiring: Arc<Wiring>,
    ring_setting: usize,
    rotation: usize,
    motion: Motion,
    trivia: Arc<Trivia>,
}

impl Rotor {
    /// Creates a stepping rotor from a permutation and a notch list.
    ///
    /// # Errors
    /// Anything [`Wiring::new`] reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Rotor;
    ///
    /// let mut rotor = Rotor::new(vec![1, 2, 3, 0], vec![0]).unwrap();
    /// assert_eq!(rotor.forward(0), 1);
    /// assert!(rotor.step()); // departs position 0, where the notch sits
    /// assert_eq!(rotor.rotation(), 1);
    /// ```
    pub fn new(wiring: Vec<usize>, notches: Vec<usize>) -> Result<Self> {
        Ok(Self::from_wiring(Arc::new(Wiring::new(wiring, notches)?)))
    }

    /// Creates a stepping rotor from letter notation over the default alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Rotor;
    ///
    /// let rotor = Rotor::from_letters("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap();
    /// assert_eq!(rotor.forward(0), 4);
    /// ```
    pub fn from_letters(coding: &str, notches: &str) -> Result<Self> {
        Self::from_letters_in(&Alphabet::default(), coding, notches)
    }

    /// Creates a stepping rotor from letter notation over `alphabet`.
    pub fn from_letters_in(alphabet: &Alphabet, coding: &str, notches: &str) -> Result<Self> {
        Ok(Self::from_wiring(Arc::new(Wiring::from_letters(
            alphabet, coding, notches,
        )?)))
    }

    /// Creates a stepping rotor at rotation 0, ring setting 0, sharing `wiring`.
    pub fn from_wiring(wiring: Arc<Wiring>) -> Self {
        Rotor {
            wiring,
            ring_setting: 0,
            rotation: 0,
            motion: Motion::Stepping,
            trivia: Arc::new(Trivia::default()),
        }
    }

    /// Creates a reflector from a permutation.
    ///
    /// The permutation should be an involution for the machine to be
    /// self-reciprocal; this is not enforced (see [`Wiring::is_involution`]).
    pub fn reflector(wiring: Vec<usize>) -> Result<Self> {
        Ok(Self::new(wiring, Vec::new())?.into_reflector())
    }

    /// Turns this rotor into a fixed reflector: rotation pinned at 0, no
    /// notches reported, stepping disabled.
    pub fn into_reflector(mut self) -> Self {
        self.rotation = 0;
        self.motion = Motion::Fixed;
        self
    }

    /// Sets the ring setting (Ringstellung).
    ///
    /// # Errors
    /// Returns [`EnigmaError::SignalOutOfRange`] if `ring_setting >= N`.
    pub fn with_ring_setting(mut self, ring_setting: usize) -> Result<Self> {
        self.ring_setting = self.checked(ring_setting)?;
        Ok(self)
    }

    /// Sets the start position (Grundstellung). Ignored for fixed rotors.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SignalOutOfRange`] if `position >= N`.
    pub fn with_position(mut self, position: usize) -> Result<Self> {
        let position = self.checked(position)?;
        if self.motion == Motion::Stepping {
            self.rotation = position;
        }
        Ok(self)
    }

    /// Attaches descriptive trivia.
    pub fn with_trivia(mut self, trivia: Trivia) -> Self {
        self.trivia = Arc::new(trivia);
        self
    }

    /// Produces an independent rotor sharing this rotor's wiring table.
    ///
    /// The copy starts at `start` (or 0) and uses `ring_setting` (or this
    /// rotor's ring setting). Its rotation is never linked to the original.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SignalOutOfRange`] if either value is `>= N`.
    pub fn clone_with(&self, ring_setting: Option<usize>, start: Option<usize>) -> Result<Self> {
        let fresh = Rotor {
            wiring: Arc::clone(&self.wiring),
            ring_setting: self.ring_setting,
            rotation: 0,
            motion: self.motion,
            trivia: Arc::clone(&self.trivia),
        };
        let fresh = match ring_setting {
            Some(ring) => fresh.with_ring_setting(ring)?,
            None => fresh,
        };
        match start {
            Some(position) => fresh.with_position(position),
            None => Ok(fresh),
        }
    }

    /// Letter form of [`clone_with`](Self::clone_with): the copy starts at
    /// the position of `start` in `alphabet`.
    ///
    /// # Errors
    /// - [`EnigmaError::SizeMismatch`] if `alphabet` has a different size.
    /// - [`EnigmaError::UnknownLetter`] if `start` is not in `alphabet`.
    pub fn clone_at_letter(&self, alphabet: &Alphabet, start: char) -> Result<Self> {
        if alphabet.len() != self.size() {
            return Err(EnigmaError::SizeMismatch {
                expected: alphabet.len(),
                actual: self.size(),
            });
        }
        self.clone_with(None, Some(alphabet.index_of(start)?))
    }

    /// Advances the rotor by one position.
    ///
    /// Returns `true` iff the new position minus one carries a notch,
    /// meaning the next (slower) rotor must step too. The departed position
    /// is not wrapped: stepping onto position 0 never reports a hit, so a
    /// notch at `N - 1` never engages. Fixed rotors do not move and always
    /// return `false`.
    pub fn step(&mut self) -> bool {
        if self.motion == Motion::Fixed {
            return false;
        }
        self.rotation += 1;
        let notch_hit = self
            .position()
            .checked_sub(1)
            .is_some_and(|departed| self.wiring.has_notch(departed));
        trace!(rotation = self.rotation, notch_hit, "rotor stepped");
        notch_hit
    }

    /// Signal travelling from the keyboard towards the reflector.
    pub fn forward(&self, signal: usize) -> usize {
        let size = self.size();
        let shift = self.shift();
        let contact = self.wiring.forward_at(modular::add(signal, shift, size));
        modular::sub(contact, shift, size)
    }

    /// Signal travelling from the reflector towards the lamps.
    pub fn backward(&self, signal: usize) -> usize {
        let size = self.size();
        let shift = self.shift();
        let contact = self.wiring.inverse_at(modular::add(signal, shift, size));
        modular::sub(contact, shift, size)
    }

    /// Number of contacts.
    pub fn size(&self) -> usize {
        self.wiring.size()
    }

    /// Raw rotation counter; grows without bound as the rotor steps.
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Rotation reduced into `0..N`.
    pub fn position(&self) -> usize {
        modular::wrap(self.rotation, self.size())
    }

    /// Fixed ring setting.
    pub fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    /// Whether this rotor steps or is fixed.
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Notches that engage the next rotor. Empty for fixed rotors.
    pub fn notches(&self) -> &[usize] {
        match self.motion {
            Motion::Stepping => self.wiring.notches(),
            Motion::Fixed => &[],
        }
    }

    /// Shared wiring table.
    pub fn wiring(&self) -> &Arc<Wiring> {
        &self.wiring
    }

    pub fn trivia(&self) -> &Trivia {
        &self.trivia
    }

    fn shift(&self) -> usize {
        modular::add(self.rotation, self.ring_setting, self.size())
    }

    fn checked(&self, value: usize) -> Result<usize> {
        if value < self.size() {
            Ok(value)
        } else {
            Err(EnigmaError::SignalOutOfRange {
                signal: value,
                size: self.size(),
            })
        }
    }
}
