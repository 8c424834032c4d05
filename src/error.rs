//! Error types for the enigmacrypt library.

use thiserror::Error;

/// Errors produced by the enigmacrypt library.
///
/// Every failing operation reports exactly one of these and leaves the
/// component it was called on unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// A keystroke was encoded on a machine without a reflector.
    #[error("cannot encode on a machine without a reflector")]
    NoReflector,

    /// One of the signals of a new plug is already wired to something.
    #[error("signal {signal} is already plugged to {partner}")]
    AlreadyPlugged { signal: usize, partner: usize },

    /// Unplug was requested for a signal that has no plug.
    #[error("signal {signal} is not plugged to anything")]
    NotPlugged { signal: usize },

    /// A rotor wiring table is not a permutation of `0..N`.
    #[error("invalid rotor wiring: {reason}")]
    InvalidWiring { reason: String },

    /// A signal, notch, ring setting or position is outside `0..size`.
    #[error("signal {signal} is outside the alphabet of size {size}")]
    SignalOutOfRange { signal: usize, size: usize },

    /// A rotor does not match the machine's alphabet size.
    #[error("rotor size {actual} does not match alphabet size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A character is not part of the machine's alphabet.
    #[error("letter {0:?} is not part of the alphabet")]
    UnknownLetter(char),

    /// The alphabet definition is unusable.
    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    /// No catalogue entry exists for the requested identifier.
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),

    /// Machine configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;

impl From<serde_json::Error> for EnigmaError {
    fn from(err: serde_json::Error) -> Self {
        EnigmaError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_reflector() {
        let err = EnigmaError::NoReflector;
        assert_eq!(
            format!("{}", err),
            "cannot encode on a machine without a reflector"
        );
    }

    #[test]
    fn test_display_already_plugged() {
        let err = EnigmaError::AlreadyPlugged {
            signal: 3,
            partner: 7,
        };
        assert_eq!(format!("{}", err), "signal 3 is already plugged to 7");
    }

    #[test]
    fn test_display_not_plugged() {
        let err = EnigmaError::NotPlugged { signal: 12 };
        assert_eq!(format!("{}", err), "signal 12 is not plugged to anything");
    }

    #[test]
    fn test_display_out_of_range() {
        let err = EnigmaError::SignalOutOfRange {
            signal: 30,
            size: 26,
        };
        assert_eq!(
            format!("{}", err),
            "signal 30 is outside the alphabet of size 26"
        );
    }

    #[test]
    fn test_display_unknown_letter() {
        let err = EnigmaError::UnknownLetter('?');
        assert_eq!(format!("{}", err), "letter '?' is not part of the alphabet");
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: EnigmaError = parse.unwrap_err().into();
        assert!(matches!(err, EnigmaError::Config(_)));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EnigmaError::NoReflector, EnigmaError::NoReflector);
        assert_ne!(
            EnigmaError::NotPlugged { signal: 1 },
            EnigmaError::NotPlugged { signal: 2 }
        );
    }
}
