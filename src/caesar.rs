//! Caesar transform: fixed-offset substitution over a bounded alphabet.
//!
//! Every character of the text is replaced by the character a fixed signed
//! offset away from it, wrapping circularly inside the alphabet. Offsets of
//! any `i32` magnitude behave as their residue modulo the alphabet size, so
//! encryption and decryption are exact inverses for every key.

use crate::alphabet::Alphabet;

/// Encrypts `plain_text` by shifting every character `key` positions up.
///
/// The caller must have validated `plain_text` against `alphabet`; the
/// transform assumes every character is already in range.
pub(crate) fn encrypt(alphabet: &Alphabet, plain_text: &str, key: i32) -> String {
    let mut cipher_text = String::with_capacity(plain_text.len());
    for c in plain_text.chars() {
        cipher_text.push(alphabet.wrap(c as i64 + i64::from(key)));
    }
    cipher_text
}

/// Decrypts `cipher_text` by shifting every character `key` positions down.
///
/// Exact inverse of [`encrypt`] for the same alphabet and key.
pub(crate) fn decrypt(alphabet: &Alphabet, cipher_text: &str, key: i32) -> String {
    let mut plain_text = String::with_capacity(cipher_text.len());
    for c in cipher_text.chars() {
        plain_text.push(alphabet.wrap(c as i64 - i64::from(key)));
    }
    plain_text
}
