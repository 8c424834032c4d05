//! Machine: coordinator of plugboard, rotor stack and reflector.
//!
//! Each keystroke is one transaction: the rotor stack steps (unless told
//! not to), then the signal travels plugboard → rotors (fast to slow) →
//! reflector → rotors (slow to fast) → plugboard.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{EnigmaError, Result};
use crate::observer::{MachineEvent, Observer, Trail};
use crate::plugboard::Plugboard;
use crate::rotor::Rotor;
use crate::utils::alphabet::Alphabet;

/// Rotor cipher machine.
///
/// Rotors are kept fastest first. The machine works with any number of
/// rotors, including none, but needs a reflector before it can encode.
pub struct Machine {
    alphabet: Alphabet,
    rotors: Vec<Rotor>,
    reflector: Option<Rotor>,
    plugboard: Plugboard,
    observers: Vec<Box<dyn Observer>>,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("alphabet", &self.alphabet)
            .field("rotors", &self.rotors)
            .field("reflector", &self.reflector)
            .field("plugboard", &self.plugboard)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Machine {
    /// Creates an empty machine over the 26-letter alphabet.
    pub fn new() -> Self {
        Self::with_alphabet(Alphabet::default())
    }

    /// Creates an empty machine whose signal space is `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Machine {
            alphabet,
            rotors: Vec::new(),
            reflector: None,
            plugboard: Plugboard::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer and returns the machine, for use while building.
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Appends a rotor behind the current slowest one.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SizeMismatch`] if the rotor's size differs from
    /// the alphabet size.
    pub fn add_rotor(&mut self, rotor: Rotor) -> Result<()> {
        self.check_size(&rotor)?;
        debug!(
            index = self.rotors.len(),
            name = rotor.trivia().name.as_deref().unwrap_or("-"),
            ring_setting = rotor.ring_setting(),
            rotation = rotor.rotation(),
            "rotor added"
        );
        self.rotors.push(rotor);
        Ok(())
    }

    /// Installs the reflector (Umkehrwalze), replacing any previous one.
    ///
    /// The rotor is pinned at rotation 0 and never stepped.
    ///
    /// # Errors
    /// Returns [`EnigmaError::SizeMismatch`] if the reflector's size differs
    /// from the alphabet size.
    pub fn set_reflector(&mut self, reflector: Rotor) -> Result<()> {
        self.check_size(&reflector)?;
        debug!(
            name = reflector.trivia().name.as_deref().unwrap_or("-"),
            involution = reflector.wiring().is_involution(),
            "reflector set"
        );
        self.reflector = Some(reflector.into_reflector());
        Ok(())
    }

    /// Connects two signals on the plugboard.
    ///
    /// # Errors
    /// - [`EnigmaError::SignalOutOfRange`] if a signal is not in `0..N`.
    /// - [`EnigmaError::AlreadyPlugged`] if either signal is already connected.
    pub fn plug(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_signal(a)?;
        self.check_signal(b)?;
        self.plugboard.plug(a, b)
    }

    /// Connects two letters on the plugboard.
    ///
    /// # Errors
    /// [`EnigmaError::UnknownLetter`] for letters outside the alphabet, and
    /// anything [`plug`](Self::plug) reports.
    pub fn plug_letters(&mut self, a: char, b: char) -> Result<()> {
        let a = self.alphabet.index_of(a)?;
        let b = self.alphabet.index_of(b)?;
        self.plug(a, b)
    }

    /// Removes the plugboard cable attached to `a`.
    ///
    /// # Errors
    /// - [`EnigmaError::SignalOutOfRange`] if `a` is not in `0..N`.
    /// - [`EnigmaError::NotPlugged`] if nothing is connected to it.
    pub fn unplug(&mut self, a: usize) -> Result<()> {
        self.check_signal(a)?;
        self.plugboard.unplug(a)
    }

    /// Removes the plugboard cable attached to letter `a`.
    pub fn unplug_letter(&mut self, a: char) -> Result<()> {
        let a = self.alphabet.index_of(a)?;
        self.unplug(a)
    }

    /// Advances the rotor stack by one keystroke without encoding.
    ///
    /// The fastest rotor always steps. Every following rotor steps only if
    /// the rotor before it reported a notch hit during this same call; the
    /// chain stops at the first rotor that is not triggered.
    pub fn step(&mut self) {
        let mut triggered = true;
        for (index, rotor) in self.rotors.iter_mut().enumerate() {
            if !triggered {
                break;
            }
            triggered = rotor.step();
            let event = MachineEvent::Stepped {
                rotor: index,
                rotation: rotor.rotation(),
                notch_hit: triggered,
            };
            for observer in self.observers.iter_mut() {
                observer.notify(&event);
            }
        }
        debug!(rotations = ?self.rotations(), "machine stepped");
    }

    /// Encodes one signal, stepping the rotors first unless `skip_rotation`.
    ///
    /// # Errors
    /// - [`EnigmaError::NoReflector`] if no reflector is installed.
    /// - [`EnigmaError::SignalOutOfRange`] if `signal` is not in `0..N`.
    ///
    /// Both are detected before the rotors move.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{Catalogue, Machine};
    ///
    /// let catalogue = Catalogue::historical();
    /// let mut machine = Machine::new();
    /// for id in ["I", "II", "III"] {
    ///     machine.add_rotor(catalogue.rotor(id).unwrap()).unwrap();
    /// }
    /// machine.set_reflector(catalogue.reflector("UKW-B").unwrap()).unwrap();
    ///
    /// assert_eq!(machine.encode(0, false).unwrap(), 5);
    /// assert_eq!(machine.encode_letter('A', false).unwrap(), 't');
    /// ```
    pub fn encode(&mut self, signal: usize, skip_rotation: bool) -> Result<usize> {
        Ok(self.encode_traced(signal, skip_rotation)?.output)
    }

    /// Letter form of [`encode`](Self::encode).
    ///
    /// The letter is looked up case-insensitively; the result is the
    /// alphabet's own letter.
    ///
    /// # Errors
    /// [`EnigmaError::UnknownLetter`] for letters outside the alphabet, and
    /// anything [`encode`](Self::encode) reports.
    pub fn encode_letter(&mut self, letter: char, skip_rotation: bool) -> Result<char> {
        let signal = self.alphabet.index_of(letter)?;
        let output = self.encode(signal, skip_rotation)?;
        self.alphabet.letter(output)
    }

    /// Encodes one signal and returns every intermediate value.
    ///
    /// # Errors
    /// Same as [`encode`](Self::encode).
    pub fn encode_traced(&mut self, signal: usize, skip_rotation: bool) -> Result<Trail> {
        self.check_signal(signal)?;
        if self.reflector.is_none() {
            return Err(EnigmaError::NoReflector);
        }
        if !skip_rotation {
            self.step();
        }

        let trail = self.traverse(signal)?;
        trace!(signals = ?trail.signals(), "signal encoded");

        if !self.observers.is_empty() {
            let event = MachineEvent::Encoded(trail.clone());
            for observer in self.observers.iter_mut() {
                observer.notify(&event);
            }
        }
        Ok(trail)
    }

    /// Encodes every letter of `text` in turn, stepping before each one.
    ///
    /// The whole text is validated before the first keystroke, so an unknown
    /// letter leaves the machine untouched.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownLetter`] for characters outside the alphabet.
    /// - [`EnigmaError::NoReflector`] if no reflector is installed.
    pub fn encode_text(&mut self, text: &str) -> Result<String> {
        let signals = self.alphabet.indices(text)?;
        if self.reflector.is_none() {
            return Err(EnigmaError::NoReflector);
        }
        let mut output = Vec::with_capacity(signals.len());
        for signal in signals {
            output.push(self.encode_traced(signal, false)?.output);
        }
        self.alphabet.text(&output)
    }

    /// Creates an independent machine with the same parts, settings and
    /// rotations. Observers are not carried over.
    pub fn duplicate(&self) -> Machine {
        Machine {
            alphabet: self.alphabet.clone(),
            rotors: self.rotors.clone(),
            reflector: self.reflector.clone(),
            plugboard: self.plugboard.clone(),
            observers: Vec::new(),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Alphabet size N.
    pub fn size(&self) -> usize {
        self.alphabet.len()
    }

    /// Rotors, fastest first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn rotor(&self, index: usize) -> Option<&Rotor> {
        self.rotors.get(index)
    }

    /// Raw rotation counter of every rotor, fastest first.
    pub fn rotations(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::rotation).collect()
    }

    /// Rotation of every rotor reduced into `0..N`, fastest first.
    pub fn positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    pub fn reflector(&self) -> Option<&Rotor> {
        self.reflector.as_ref()
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    fn traverse(&self, signal: usize) -> Result<Trail> {
        let reflector = self.reflector.as_ref().ok_or(EnigmaError::NoReflector)?;

        let plugged = self.plugboard.apply(signal);
        let mut current = plugged;

        let mut forward = Vec::with_capacity(self.rotors.len());
        for rotor in &self.rotors {
            current = rotor.forward(current);
            forward.push(current);
        }

        current = reflector.forward(current);
        let reflected = current;

        let mut backward = Vec::with_capacity(self.rotors.len());
        for rotor in self.rotors.iter().rev() {
            current = rotor.backward(current);
            backward.push(current);
        }

        Ok(Trail {
            input: signal,
            plugged,
            forward,
            reflected,
            backward,
            output: self.plugboard.apply(current),
        })
    }

    fn check_signal(&self, signal: usize) -> Result<()> {
        if signal < self.size() {
            Ok(())
        } else {
            Err(EnigmaError::SignalOutOfRange {
                signal,
                size: self.size(),
            })
        }
    }

    fn check_size(&self, rotor: &Rotor) -> Result<()> {
        if rotor.size() == self.size() {
            Ok(())
        } else {
            Err(EnigmaError::SizeMismatch {
                expected: self.size(),
                actual: rotor.size(),
            })
        }
    }
}
