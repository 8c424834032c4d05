//! Catalogue of historical rotor and reflector wirings.
//!
//! Presets are plain constants in letter notation. [`Catalogue::historical`]
//! builds every wiring table once and hands out rotors that share those
//! tables, so instantiating many machines never copies a permutation.
//!
//! Sources: cryptomuseum.com wiring tables. Entry wheels of the commercial,
//! Swiss, Zählwerk and Tirpitz models are not modelled.

use std::sync::Arc;

use crate::error::{EnigmaError, Result};
use crate::rotor::{Rotor, Trivia};
use crate::utils::alphabet::Alphabet;
use crate::wiring::Wiring;

/// One catalogue entry in letter notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorPreset {
    /// Lookup key, unique within its table.
    pub id: &'static str,
    pub wiring: &'static str,
    /// Notch letters; empty for non-stepping wheels and reflectors.
    pub notches: &'static str,
    /// Historical designation, as engraved on the wheel.
    pub name: &'static str,
    pub model: Option<&'static str>,
    pub year: Option<u16>,
}

const fn preset(
    id: &'static str,
    wiring: &'static str,
    notches: &'static str,
    name: &'static str,
    model: Option<&'static str>,
    year: Option<u16>,
) -> RotorPreset {
    RotorPreset {
        id,
        wiring,
        notches,
        name,
        model,
        year,
    }
}

const ENIGMA_I: Option<&str> = Some("Enigma I");
const M3_ARMY: Option<&str> = Some("M3 Army");
const M3_M4_NAVAL: Option<&str> = Some("M3 & M4 Naval (FEB 1942)");
const A26: Option<&str> = Some("Commercial Enigma A26");
const SWISS_K: Option<&str> = Some("Swiss Enigma K variant");
const ZAHLWERK: Option<&str> = Some("Zählwerk Enigma A28 & G31");
const TIRPITZ: Option<&str> = Some("Tirpitz");

/// Stepping rotors (including the non-stepping Greek wheels Beta and Gamma,
/// which have no notches).
#[rustfmt::skip]
pub const ROTORS: &[RotorPreset] = &[
    // Wehrmacht, Luftwaffe, Kriegsmarine
    preset("I",    "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", "I",   ENIGMA_I, Some(1930)),
    preset("II",   "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E", "II",  ENIGMA_I, Some(1930)),
    preset("III",  "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V", "III", ENIGMA_I, Some(1930)),
    preset("IV",   "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J", "IV",  M3_ARMY, Some(1938)),
    preset("V",    "VZBRGITYUPSDNHLXAWMJQOFECK", "Z", "V",   M3_ARMY, Some(1938)),
    // Kriegsmarine
    preset("VI",   "JPGVOUMFYQBENHZRDKASXLICTW", "ZM", "VI",   M3_M4_NAVAL, Some(1939)),
    preset("VII",  "NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM", "VII",  M3_M4_NAVAL, Some(1939)),
    preset("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM", "VIII", M3_M4_NAVAL, Some(1939)),
    // Kriegsmarine, U-boat division only
    preset("Beta",  "LEYJVCNIXWPBQMDRTAKZGFUHOS", "", "Beta",  Some("U-boat Enigma M4 R2"), Some(1941)),
    preset("Gamma", "FSOKANUERHMBTIYCWLQPZXVGJD", "", "Gamma", Some("U-boat Enigma M4 R2"), Some(1942)),
    // Commercial Enigma A26, aka Enigma D
    preset("A26-I",   "LPGSZMHAEOQKVXRFYBUTNICJDW", "Y", "I",   A26, Some(1926)),
    preset("A26-II",  "SLVGBTFXJQOHEWIRZYAMKPCNDU", "E", "II",  A26, Some(1926)),
    preset("A26-III", "CJGDPSHKTURAWZXFMYNQOBVLIE", "N", "III", A26, Some(1926)),
    // Swiss-K
    preset("Swiss-I",   "PEZUOHXSCVFMTBGLRINQJWAYDK", "Y", "I",   SWISS_K, None),
    preset("Swiss-II",  "ZOUESYDKFWPCIQXHMVBLGNJRAT", "E", "II",  SWISS_K, None),
    preset("Swiss-III", "EHRVXGAOBQUSIMZFLYNWKTPDJC", "N", "III", SWISS_K, None),
    // Enigma G
    preset("Zahlwerk-I",   "LPGSZMHAEOQKVXRFYBUTNICJDW", "SUVWZABCEFGIKLOPQ", "I",   ZAHLWERK, None),
    preset("Zahlwerk-II",  "SLVGBTFXJQOHEWIRZYAMKPCNDU", "STVYZACDFGHKMNQ",   "II",  ZAHLWERK, None),
    preset("Zahlwerk-III", "CJGDPSHKTURAWZXFMYNQOBVLIE", "UWXAEFHKMNR",       "III", ZAHLWERK, None),
    // Enigma T (Tirpitz)
    preset("Tirpitz-I",    "KPTYUELOCVGRFQDANJMBSWHZXI", "WZEKQ", "I",    TIRPITZ, None),
    preset("Tirpitz-II",   "UPHZLWEQMTDJXCAKSOIGVBYFNR", "WZFLR", "II",   TIRPITZ, None),
    preset("Tirpitz-III",  "QUDLYRFEKONVZAXWHMGPJBSICT", "WZEKQ", "III",  TIRPITZ, None),
    preset("Tirpitz-IV",   "CIWTBKXNRESPFLYDAGVHQUOJZM", "WZFLR", "IV",   TIRPITZ, None),
    preset("Tirpitz-V",    "UAXGISNJBVERDYLFZWTPCKOHMQ", "YCFKR", "V",    TIRPITZ, None),
    preset("Tirpitz-VI",   "XFUZGALVHCNYSEWQTDMRBKPIOJ", "XEIMQ", "VI",   TIRPITZ, None),
    preset("Tirpitz-VII",  "BJVFTXPLNAYOZIKWGDQERUCHSM", "YCFKR", "VII",  TIRPITZ, None),
    preset("Tirpitz-VIII", "YMTPNZHWKODAJXELUQVGCBISFR", "XEIMQ", "VIII", TIRPITZ, None),
];

/// Reflectors (Umkehrwalzen).
#[rustfmt::skip]
pub const REFLECTORS: &[RotorPreset] = &[
    preset("UKW-A",      "EJMZALYXVBWFCRQUONTSPIKHGD", "", "UKW A", None, None),
    preset("UKW-B",      "YRUHQSLDPXNGOKMIEBFZCWVJAT", "", "UKW B", None, None),
    preset("UKW-C",      "FVPJIAOYEDRZXWGCTKUQSBNMHL", "", "UKW C", None, None),
    // Thin reflectors of the U-boat M4
    preset("UKW-B-thin", "ENKQAUYWJICOPBLMDXZVFTHRGS", "", "UKW B", Some("U-boat Enigma M4"), None),
    preset("UKW-C-thin", "RDOBJNTKVEHMLFCWZAXGYIPSUQ", "", "UKW C", Some("U-boat Enigma M4"), None),
    preset("A26-UKW",      "IMETCGFRAYSQBZXWLHKDVUPOJN", "", "UKW", A26, Some(1926)),
    preset("Swiss-UKW",    "IMETCGFRAYSQBZXWLHKDVUPOJN", "", "UKW", SWISS_K, None),
    preset("Zahlwerk-UKW", "IMETCGFRAYSQBZXWLHKDVUPOJN", "", "UKW", ZAHLWERK, None),
    preset("Tirpitz-UKW",  "GEKPBTAUMOCNILJDXZYFHWVQSR", "", "UKW", TIRPITZ, None),
];

impl RotorPreset {
    /// Builds a fresh, unshared rotor from this preset.
    ///
    /// # Errors
    /// Anything [`Wiring::from_letters`] reports.
    pub fn build(&self, alphabet: &Alphabet) -> Result<Rotor> {
        let wiring = Arc::new(Wiring::from_letters(alphabet, self.wiring, self.notches)?);
        Ok(Rotor::from_wiring(wiring).with_trivia(Trivia {
            name: Some(self.name.to_string()),
            model: self.model.map(str::to_string),
            year: self.year,
        }))
    }
}

/// Arena of prebuilt rotors; lookups return independent rotors that share
/// the arena's wiring tables.
#[derive(Debug, Clone)]
pub struct Catalogue {
    rotors: Vec<(&'static str, Rotor)>,
    reflectors: Vec<(&'static str, Rotor)>,
}

impl Catalogue {
    /// Builds the catalogue of every historical preset.
    pub fn historical() -> Self {
        Self::from_presets(ROTORS, REFLECTORS)
            .expect("historical presets are valid 26-letter wirings")
    }

    /// Builds a catalogue from custom preset tables over the default alphabet.
    ///
    /// # Errors
    /// Anything [`RotorPreset::build`] reports for the first invalid preset.
    pub fn from_presets(rotors: &[RotorPreset], reflectors: &[RotorPreset]) -> Result<Self> {
        let alphabet = Alphabet::default();
        let build = |presets: &[RotorPreset]| -> Result<Vec<(&'static str, Rotor)>> {
            presets
                .iter()
                .map(|p| Ok((p.id, p.build(&alphabet)?)))
                .collect()
        };
        Ok(Catalogue {
            rotors: build(rotors)?,
            reflectors: build(reflectors)?,
        })
    }

    /// Returns a stepping rotor at rotation 0, ring setting 0.
    ///
    /// Identifiers are matched ignoring ASCII case.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownPreset`] if no rotor has this id.
    pub fn rotor(&self, id: &str) -> Result<Rotor> {
        Self::lookup(&self.rotors, id)
    }

    /// Returns a reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownPreset`] if no reflector has this id.
    pub fn reflector(&self, id: &str) -> Result<Rotor> {
        Ok(Self::lookup(&self.reflectors, id)?.into_reflector())
    }

    pub fn rotor_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rotors.iter().map(|(id, _)| *id)
    }

    pub fn reflector_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.reflectors.iter().map(|(id, _)| *id)
    }

    fn lookup(entries: &[(&'static str, Rotor)], id: &str) -> Result<Rotor> {
        entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(id))
            .ok_or_else(|| EnigmaError::UnknownPreset(id.to_string()))
            .and_then(|(_, template)| template.clone_with(None, None))
    }
}
