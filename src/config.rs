//! Declarative machine configuration.
//!
//! A [`MachineConfig`] names catalogue presets for the rotor stack (fastest
//! first) and the reflector, gives each rotor its ring setting and start
//! position, and lists plugboard cables as two-letter strings.
//!
//! ```json
//! {
//!   "rotors": [
//!     { "preset": "I",   "ring_setting": 0, "position": 0 },
//!     { "preset": "II", "position": "e" },
//!     { "preset": "III" }
//!   ],
//!   "reflector": "UKW-B",
//!   "plugs": ["ab", "oq"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalogue::Catalogue;
use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::utils::alphabet::Alphabet;

/// A dial reading: a signal index or a letter of the machine's alphabet.
///
/// In JSON an index is a number and a letter is a one-character string, so
/// `"position": 16` and `"position": "q"` mean the same on the 26-letter
/// alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dial {
    Index(usize),
    Letter(char),
}

impl Dial {
    /// Resolves the reading to a signal index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownLetter`] if a letter is not in
    /// `alphabet`. Indices are passed through and range-checked by the rotor.
    pub fn resolve(self, alphabet: &Alphabet) -> Result<usize> {
        match self {
            Dial::Index(index) => Ok(index),
            Dial::Letter(letter) => alphabet.index_of(letter),
        }
    }
}

impl Default for Dial {
    fn default() -> Self {
        Dial::Index(0)
    }
}

impl From<usize> for Dial {
    fn from(index: usize) -> Self {
        Dial::Index(index)
    }
}

impl From<char> for Dial {
    fn from(letter: char) -> Self {
        Dial::Letter(letter)
    }
}

/// Placement of one catalogue rotor in the stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotorSetting {
    /// Catalogue id, e.g. `"III"` or `"Tirpitz-V"`.
    pub preset: String,
    /// Ringstellung.
    #[serde(default)]
    pub ring_setting: Dial,
    /// Grundstellung.
    #[serde(default)]
    pub position: Dial,
}

impl RotorSetting {
    pub fn new(preset: impl Into<String>) -> Self {
        RotorSetting {
            preset: preset.into(),
            ring_setting: Dial::default(),
            position: Dial::default(),
        }
    }

    /// Sets the ring setting and start position.
    pub fn with_dials(mut self, ring_setting: impl Into<Dial>, position: impl Into<Dial>) -> Self {
        self.ring_setting = ring_setting.into();
        self.position = position.into();
        self
    }
}

/// Complete description of a machine's parts and settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Letters of the keyboard; the 26-letter alphabet when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet: Option<String>,
    /// Rotor stack, fastest first.
    pub rotors: Vec<RotorSetting>,
    /// Catalogue id of the reflector.
    pub reflector: String,
    /// Plugboard cables, each exactly two letters.
    #[serde(default)]
    pub plugs: Vec<String>,
}

impl MachineConfig {
    /// Configuration with the given rotor presets at ring setting and
    /// position 0, and no plugs.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{Catalogue, MachineConfig};
    ///
    /// let config = MachineConfig::with_rotors(["I", "II", "III"], "UKW-B");
    /// let mut machine = config.build(&Catalogue::historical()).unwrap();
    /// assert_eq!(machine.encode_text("the").unwrap(), "zpt");
    /// ```
    pub fn with_rotors<I, S>(rotors: I, reflector: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MachineConfig {
            alphabet: None,
            rotors: rotors.into_iter().map(RotorSetting::new).collect(),
            reflector: reflector.to_string(),
            plugs: Vec::new(),
        }
    }

    /// Parses a JSON configuration.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Assembles a machine from catalogue parts.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownPreset`] for ids missing from `catalogue`.
    /// - [`EnigmaError::SignalOutOfRange`] for ring settings or positions
    ///   outside `0..N`.
    /// - [`EnigmaError::UnknownLetter`] for dial letters outside the alphabet.
    /// - [`EnigmaError::Config`] for plugs that are not two letters.
    /// - Any alphabet, size or plugboard error the parts report.
    pub fn build(&self, catalogue: &Catalogue) -> Result<Machine> {
        let alphabet = match &self.alphabet {
            Some(letters) => Alphabet::new(letters)?,
            None => Alphabet::default(),
        };
        let mut machine = Machine::with_alphabet(alphabet);

        for setting in &self.rotors {
            let ring_setting = setting.ring_setting.resolve(machine.alphabet())?;
            let position = setting.position.resolve(machine.alphabet())?;
            let rotor = catalogue
                .rotor(&setting.preset)?
                .with_ring_setting(ring_setting)?
                .with_position(position)?;
            machine.add_rotor(rotor)?;
        }
        machine.set_reflector(catalogue.reflector(&self.reflector)?)?;

        for plug in &self.plugs {
            let mut letters = plug.chars();
            match (letters.next(), letters.next(), letters.next()) {
                (Some(a), Some(b), None) => machine.plug_letters(a, b)?,
                _ => {
                    return Err(EnigmaError::Config(format!(
                        "plug {:?} must be exactly two letters",
                        plug
                    )))
                }
            }
        }

        debug!(
            rotors = self.rotors.len(),
            reflector = %self.reflector,
            plugs = self.plugs.len(),
            "machine built from configuration"
        );
        Ok(machine)
    }
}
