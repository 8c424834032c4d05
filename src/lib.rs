//! Rotor cipher machine engine of the Enigma family.
//!
//! A keystroke is an integer signal in `0..N`. Each keystroke first advances
//! the rotor stack, then the signal travels through the plugboard, forward
//! through every rotor, through the reflector, back through every rotor and
//! through the plugboard again. Because the reflector is an involution, the
//! same settings decrypt what they encrypt.
//!
//! # Architecture
//!
//! ```text
//! Wiring     (immutable permutation + inverse + notches, shared via Arc)
//!     ↕ held by
//! Rotor      (rotation counter + ring setting; Stepping or Fixed = reflector)
//!     ↕ stacked fast-to-slow inside
//! Machine    (plugboard → rotors → reflector → rotors → plugboard, stepping chain)
//!     ↑ assembled from
//! Catalogue + MachineConfig (historical presets, declarative settings)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with two machines set up the same way:
//!
//! ```
//! use enigmacrypt::{Catalogue, MachineConfig};
//!
//! let catalogue = Catalogue::historical();
//! let config = MachineConfig::with_rotors(["I", "II", "III"], "UKW-B");
//!
//! let mut sender = config.build(&catalogue).unwrap();
//! let mut receiver = config.build(&catalogue).unwrap();
//!
//! let cipher = sender.encode_text("thequickbrownfox").unwrap();
//! assert_eq!(cipher, "zptrrateujdawkfe");
//! assert_eq!(receiver.encode_text(&cipher).unwrap(), "thequickbrownfox");
//! ```
//!
//! Assemble a machine by hand over any alphabet:
//!
//! ```
//! use enigmacrypt::{Alphabet, Machine, Rotor};
//!
//! let mut machine = Machine::with_alphabet(Alphabet::new("abcd").unwrap());
//! machine.add_rotor(Rotor::new(vec![1, 2, 3, 0], vec![3]).unwrap()).unwrap();
//! machine.set_reflector(Rotor::reflector(vec![2, 3, 0, 1]).unwrap()).unwrap();
//! machine.plug(0, 1).unwrap();
//!
//! let cipher = machine.encode(0, true).unwrap();
//! assert_eq!(machine.encode(cipher, true).unwrap(), 0);
//! ```

#![deny(clippy::all)]

pub mod error;

mod catalogue;
mod config;
mod machine;
mod observer;
mod plugboard;
mod rotor;
pub mod utils;
mod wiring;

pub use catalogue::{Catalogue, RotorPreset, REFLECTORS, ROTORS};
pub use config::{Dial, MachineConfig, RotorSetting};
pub use error::{EnigmaError, Result};
pub use machine::Machine;
pub use observer::{FnObserver, MachineEvent, Observer, Trail};
pub use plugboard::Plugboard;
pub use rotor::{Motion, Rotor, Trivia};
pub use utils::alphabet::Alphabet;
pub use wiring::Wiring;
