//! Regression tests for two key-handling defects fixed before release.
//!
//! Defect 1: an empty Bellaso key sent key expansion into a loop that
//! never produced a stream. The engine now rejects the empty key up
//! front, before the text is even inspected.
//!
//! Defect 2: Caesar keys below zero or beyond the alphabet size drifted
//! out of range, because the wrap correction only handled a single
//! overshoot in one direction. The wrap is now a single floor modulo, so
//! every `i32` key lands in range.

use cifra::error::CifraError;
use cifra::Cifra;

/// Keys that used to drift: strongly negative, multi-wrap, and the i32
/// extremes.
const EXTREME_KEYS: [i32; 14] = [
    -1,
    -63,
    -64,
    -65,
    -127,
    -4096,
    -100_000,
    i32::MIN,
    63,
    64,
    65,
    4096,
    100_000,
    i32::MAX,
];

/// In-range plaintext vectors used across multiple tests, including both
/// alphabet edges.
const PLAINTEXTS: [&str; 6] = ["", " ", "_", " _", "HELLO WORLD", "A9 ^_[]\\ ?@"];

// ═══════════════════════════════════════════════════════════════════════
// Defect 1: empty Bellaso keys
// ═══════════════════════════════════════════════════════════════════════

/// The empty key is an error for every text, never a hang and never a
/// partial result.
#[test]
fn empty_key_is_rejected_for_all_texts() {
    let cifra = Cifra::new();
    for plain_text in PLAINTEXTS {
        assert_eq!(
            cifra.encrypt_bellaso(plain_text, ""),
            Err(CifraError::EmptyKey),
            "encrypt accepted an empty key for {:?}",
            plain_text
        );
        assert_eq!(
            cifra.decrypt_bellaso(plain_text, ""),
            Err(CifraError::EmptyKey),
            "decrypt accepted an empty key for {:?}",
            plain_text
        );
    }
}

/// Empty text does not excuse an empty key — the key check runs first.
#[test]
fn empty_key_with_empty_text_still_errors() {
    let cifra = Cifra::new();
    assert_eq!(cifra.encrypt_bellaso("", ""), Err(CifraError::EmptyKey));
    assert_eq!(cifra.decrypt_bellaso("", ""), Err(CifraError::EmptyKey));
}

/// Expansion itself refuses the empty key for every target length.
#[test]
fn empty_key_expansion_errors_for_any_length() {
    let cifra = Cifra::new();
    for len in [0, 1, 7, 4096] {
        assert_eq!(
            cifra.expand_key("", len),
            Err(CifraError::EmptyKey),
            "expansion accepted an empty key for len {}",
            len
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Defect 2: negative and multi-wrap Caesar keys
// ═══════════════════════════════════════════════════════════════════════

/// The probe that used to escape the range: shifting the lower bound down
/// by one must fold to the upper bound, not drift to code 31.
#[test]
fn negative_key_folds_to_upper_bound() {
    let cifra = Cifra::new();
    assert_eq!(cifra.encrypt_caesar(" ", -1).unwrap(), "_");
    assert_eq!(cifra.decrypt_caesar(" ", 1).unwrap(), "_");
}

/// Every extreme key keeps cipher text inside the alphabet and round-trips
/// back to the plaintext.
#[test]
fn extreme_keys_stay_in_range_and_roundtrip() {
    let cifra = Cifra::new();
    for key in EXTREME_KEYS {
        for plain_text in PLAINTEXTS {
            let cipher_text = cifra.encrypt_caesar(plain_text, key).unwrap();
            assert!(
                cifra.validate_range(&cipher_text),
                "cipher text escaped the range for key {}, plaintext {:?}",
                key,
                plain_text
            );
            assert_eq!(
                cifra.decrypt_caesar(&cipher_text, key).unwrap(),
                plain_text,
                "roundtrip failed for key {}, plaintext {:?}",
                key,
                plain_text
            );
        }
    }
}

/// An extreme key behaves exactly like its residue modulo the alphabet
/// size — one fold, no drift.
#[test]
fn extreme_keys_match_reduced_keys() {
    let cifra = Cifra::new();
    for key in EXTREME_KEYS {
        let reduced = key.rem_euclid(64);
        for plain_text in PLAINTEXTS {
            assert_eq!(
                cifra.encrypt_caesar(plain_text, key).unwrap(),
                cifra.encrypt_caesar(plain_text, reduced).unwrap(),
                "key {} diverged from its residue {}",
                key,
                reduced
            );
        }
    }
}

/// Bellaso offsets at the top of the range fold across two alphabets and
/// still invert cleanly.
#[test]
fn bellaso_top_edge_key_stream_roundtrips() {
    let cifra = Cifra::new();
    // '_' (95) + '_' (95) = 190, two alphabets above the lower bound
    assert_eq!(cifra.encrypt_bellaso("__", "_").unwrap(), ">>");
    assert_eq!(cifra.decrypt_bellaso(">>", "_").unwrap(), "__");
}
