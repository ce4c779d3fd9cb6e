//! Bellaso transform: polyalphabetic substitution with a repeating key.
//!
//! The key is expanded cyclically to the length of the text, then each
//! text character is offset by the character code of the key-stream
//! character at the same position, wrapping inside the alphabet. A key of
//! length one degenerates to a Caesar cipher keyed by that character's
//! code.

use crate::alphabet::Alphabet;

/// Expands `key` cyclically to exactly `len` characters.
///
/// Position `i` of the stream is `key[i mod key_len]`. The engine rejects
/// empty keys before this point is ever reached.
pub(crate) fn expand_key(key: &str, len: usize) -> String {
    key.chars().cycle().take(len).collect()
}

/// Encrypts `plain_text` against an equal-length `key_stream`.
///
/// Text and stream are walked in lockstep, one shared position. The engine
/// checks range and length before calling.
pub(crate) fn encrypt(alphabet: &Alphabet, plain_text: &str, key_stream: &str) -> String {
    plain_text
        .chars()
        .zip(key_stream.chars())
        .map(|(c, k)| alphabet.wrap(c as i64 + k as i64))
        .collect()
}

/// Decrypts `cipher_text` against an equal-length `key_stream`.
///
/// Exact inverse of [`encrypt`] for the same alphabet and stream.
pub(crate) fn decrypt(alphabet: &Alphabet, cipher_text: &str, key_stream: &str) -> String {
    cipher_text
        .chars()
        .zip(key_stream.chars())
        .map(|(c, k)| alphabet.wrap(c as i64 - k as i64))
        .collect()
}
