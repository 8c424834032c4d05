//! Frozen regression vectors for the public API.
//!
//! All expected values are snapshots taken from the three-rotor M3 setup
//! (rotors I, II, III with reflector UKW-B): any change in output indicates
//! a regression.
//!
//! Coverage:
//! - `error::EnigmaError`
//! - `utils::alphabet::Alphabet`
//! - `Wiring`, `Rotor`, `Plugboard`
//! - `Catalogue` and `MachineConfig`
//! - `Machine` (end-to-end)

use std::error::Error;

use enigmacrypt::error::EnigmaError;
use enigmacrypt::utils::alphabet::Alphabet;
use enigmacrypt::{Catalogue, Machine, MachineConfig, Motion, Plugboard, Rotor, Wiring};

fn m3() -> Machine {
    MachineConfig::with_rotors(["I", "II", "III"], "UKW-B")
        .build(&Catalogue::historical())
        .unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// EnigmaError — trait surface
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn error_is_std_error_without_source() {
    let err: Box<dyn Error> = Box::new(EnigmaError::NoReflector);
    assert!(err.source().is_none());
    assert_eq!(
        err.to_string(),
        "cannot encode on a machine without a reflector"
    );
}

#[test]
fn error_clone_and_eq() {
    let err = EnigmaError::SignalOutOfRange {
        signal: 30,
        size: 26,
    };
    assert_eq!(err.clone(), err);
    assert_ne!(err, EnigmaError::NotPlugged { signal: 30 });
}

#[test]
fn error_display_snapshots() {
    let cases = [
        (
            EnigmaError::NotPlugged { signal: 4 },
            "signal 4 is not plugged to anything",
        ),
        (
            EnigmaError::SizeMismatch {
                expected: 26,
                actual: 4,
            },
            "rotor size 4 does not match alphabet size 26",
        ),
        (
            EnigmaError::UnknownLetter('!'),
            "letter '!' is not part of the alphabet",
        ),
        (
            EnigmaError::UnknownPreset("IX".to_string()),
            "unknown preset \"IX\"",
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn json_errors_become_config_errors() {
    let err = MachineConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, EnigmaError::Config(_)));
    assert!(err.to_string().starts_with("configuration error: "));
}

// ═══════════════════════════════════════════════════════════════════════
// Building blocks
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn alphabet_default_is_lowercase_latin() {
    let alphabet = Alphabet::default();
    assert_eq!(alphabet.len(), 26);
    assert_eq!(alphabet.index_of('Q').unwrap(), 16);
    assert_eq!(alphabet.text(&[7, 4, 11, 11, 14]).unwrap(), "hello");
}

#[test]
fn wiring_rejects_non_permutations() {
    assert!(matches!(
        Wiring::new(vec![0, 0, 1], vec![]),
        Err(EnigmaError::InvalidWiring { .. })
    ));
    assert!(matches!(
        Wiring::new(vec![0, 1], vec![2]),
        Err(EnigmaError::SignalOutOfRange { .. })
    ));
}

#[test]
fn rotor_i_forward_table() {
    let rotor = Catalogue::historical().rotor("I").unwrap();
    let forward: Vec<usize> = (0..26).map(|s| rotor.forward(s)).collect();
    assert_eq!(
        forward,
        vec![
            4, 10, 12, 5, 11, 6, 3, 16, 21, 25, 13, 19, 14, 22, 24, 7, 23, 20, 18, 15, 0, 8, 1, 17,
            2, 9
        ]
    );
    assert_eq!(rotor.notches(), &[16]);
    assert_eq!(rotor.motion(), Motion::Stepping);
}

#[test]
fn reflector_reports_no_notches() {
    let reflector = Rotor::reflector(vec![1, 0, 3, 2]).unwrap();
    assert_eq!(reflector.motion(), Motion::Fixed);
    assert!(reflector.notches().is_empty());
}

#[test]
fn plugboard_error_order() {
    let mut plugboard = Plugboard::new();
    plugboard.plug(0, 1).unwrap();
    assert_eq!(
        plugboard.plug(2, 0).unwrap_err(),
        EnigmaError::AlreadyPlugged {
            signal: 0,
            partner: 1
        }
    );
    assert_eq!(
        plugboard.unplug(5).unwrap_err(),
        EnigmaError::NotPlugged { signal: 5 }
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Machine — frozen vectors
// ═══════════════════════════════════════════════════════════════════════

/// Frozen trail of the first keystroke on a fresh M3.
#[test]
fn m3_first_keystroke_trail() {
    let mut machine = m3();
    let trail = machine.encode_traced(0, false).unwrap();
    assert_eq!(trail.signals(), vec![0, 0, 9, 1, 3, 7, 3, 2, 5, 5]);
    assert_eq!(machine.rotations(), vec![1, 0, 0]);
}

/// Frozen substitution table with stepping suppressed.
#[test]
fn m3_skip_rotation_table() {
    let mut machine = m3();
    let table: Vec<usize> = (0..26).map(|s| machine.encode(s, true).unwrap()).collect();
    assert_eq!(
        table,
        vec![
            13, 5, 23, 20, 7, 1, 9, 4, 17, 6, 14, 15, 22, 0, 10, 11, 18, 8, 16, 21, 3, 19, 12, 2,
            25, 24
        ]
    );
    assert_eq!(machine.rotations(), vec![0, 0, 0]);
}

#[test]
fn m3_pangram_vector() {
    let mut machine = m3();
    assert_eq!(
        machine
            .encode_text("thequickbrownfoxjumpsoverthelazydog")
            .unwrap(),
        "zptrrateujdawkfeabuuyiiplxxlzijvneh"
    );
    assert_eq!(machine.rotations(), vec![35, 1, 0]);
}

/// Frozen vector with ring setting, start positions and plugs.
#[test]
fn configured_machine_vector() {
    let config = MachineConfig::from_json(
        r#"{
            "rotors": [
                { "preset": "I", "ring_setting": 2, "position": 16 },
                { "preset": "II", "position": 4 },
                { "preset": "III" }
            ],
            "reflector": "UKW-B",
            "plugs": ["ab", "oq"]
        }"#,
    )
    .unwrap();
    let catalogue = Catalogue::historical();

    let mut sender = config.build(&catalogue).unwrap();
    assert_eq!(sender.encode_text("helloworld").unwrap(), "rtvtnhxeqs");
    assert_eq!(sender.rotations(), vec![26, 5, 1]);

    let mut receiver = config.build(&catalogue).unwrap();
    assert_eq!(receiver.encode_text("rtvtnhxeqs").unwrap(), "helloworld");
}

/// Frozen vector for a stack whose fast rotor's only notch sits on `Z`.
#[test]
fn z_notch_rotor_stack_vector() {
    let config = MachineConfig::with_rotors(["V", "VI", "VIII"], "UKW-C");
    let catalogue = Catalogue::historical();
    let plaintext = "thequickbrownfoxjumpsoverthelazydog".repeat(2);

    let mut sender = config.build(&catalogue).unwrap();
    let cipher = sender.encode_text(&plaintext).unwrap();
    assert_eq!(
        cipher,
        "kxvwgrbbtitpdyiiqlhmxcefukwtrcecqyklpgvlobgfclbfasbysgxrnnfhbsnoypsquo"
    );
    assert_eq!(sender.rotations(), vec![70, 0, 0]);

    let mut receiver = config.build(&catalogue).unwrap();
    assert_eq!(receiver.encode_text(&cipher).unwrap(), plaintext);
}

#[test]
fn failed_text_encode_consumes_no_keystrokes() {
    let mut machine = m3();
    assert_eq!(
        machine.encode_text("the quick").unwrap_err(),
        EnigmaError::UnknownLetter(' ')
    );
    assert_eq!(machine.rotations(), vec![0, 0, 0]);
    assert_eq!(machine.encode_text("the").unwrap(), "zpt");
}
