//! Cifra: the classical substitution cipher engine.
//!
//! Orchestrates the Caesar and Bellaso transforms over a configurable
//! [`Alphabet`] and enforces the validation policy: every operation checks
//! its text and key against the alphabet before any arithmetic runs. The
//! engine holds no key material and no mutable state; every operation is a
//! pure function of its arguments.

use crate::alphabet::Alphabet;
use crate::bellaso;
use crate::caesar;
use crate::error::CifraError;

/// Classical substitution cipher engine over a bounded alphabet.
///
/// `Cifra` exposes two historical ciphers that share one character domain:
///
/// - **Caesar**: every character is shifted by a fixed signed offset.
/// - **Bellaso**: every character is shifted by the character code of a
///   repeating key, position by position.
///
/// Both wrap circularly inside the engine's [`Alphabet`], so for any key
/// the decrypt operation is the exact inverse of the encrypt operation.
///
/// # Validation policy
///
/// Every transform validates its inputs up front and fails fast with
/// [`CifraError::OutOfRangeInput`] before touching a single character;
/// arithmetic never runs on out-of-range input, and no partial output is
/// ever produced. [`validate_range`](Cifra::validate_range) stays public
/// for callers that want to pre-check text before choosing an operation.
///
/// # Security
///
/// These ciphers are of historical and educational interest only. They are
/// trivially breakable and must not be used to protect real data.
///
/// # Examples
///
/// ```
/// use cifra::Cifra;
///
/// let cifra = Cifra::new();
///
/// let cipher_text = cifra.encrypt_caesar("ATTACK AT DAWN", 3).unwrap();
/// assert_eq!(cipher_text, "DWWDFN#DW#GDZQ");
/// assert_eq!(cifra.decrypt_caesar(&cipher_text, 3).unwrap(), "ATTACK AT DAWN");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cifra {
    alphabet: Alphabet,
}

impl Default for Cifra {
    /// Returns an engine over the canonical 64-symbol alphabet.
    fn default() -> Self {
        Self::new()
    }
}

impl Cifra {
    /// Creates an engine over the canonical alphabet (codes 32 through 95).
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Cifra;
    ///
    /// let cifra = Cifra::new();
    /// assert_eq!(cifra.alphabet().size(), 64);
    /// ```
    pub fn new() -> Self {
        Cifra {
            alphabet: Alphabet::canonical(),
        }
    }

    /// Creates an engine over a custom alphabet.
    ///
    /// # Parameters
    ///
    /// - `alphabet`: Character range the engine will accept and wrap in.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::{Alphabet, Cifra};
    ///
    /// let letters = Alphabet::new('A', 'Z').unwrap();
    /// let cifra = Cifra::with_alphabet(letters);
    /// assert_eq!(cifra.encrypt_caesar("HELLO", 3).unwrap(), "KHOOR");
    /// ```
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Cifra { alphabet }
    }

    /// Returns the alphabet this engine operates on.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Reports whether every character of `text` lies inside the alphabet.
    ///
    /// The empty string is vacuously valid. This is the same check every
    /// transform applies internally; calling it first lets a caller reject
    /// bad input without constructing an error.
    ///
    /// # Parameters
    ///
    /// - `text`: Text to check against the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Cifra;
    ///
    /// let cifra = Cifra::new();
    /// assert!(cifra.validate_range("HELLO WORLD 123_"));
    /// assert!(!cifra.validate_range("lowercase is outside"));
    /// ```
    pub fn validate_range(&self, text: &str) -> bool {
        self.alphabet.validate(text)
    }

    /// Encrypts `plain_text` with the Caesar cipher.
    ///
    /// Each character is shifted `key` positions up the alphabet, wrapping
    /// circularly. Keys of any `i32` magnitude or sign are accepted; a key
    /// acts as its residue modulo the alphabet size, so `key` and
    /// `key + size` produce identical output.
    ///
    /// # Parameters
    ///
    /// - `plain_text`: Text to encrypt; every character must be in range.
    /// - `key`: Signed shift offset.
    ///
    /// # Returns
    ///
    /// The cipher text, with the same character count as `plain_text`.
    ///
    /// # Errors
    ///
    /// Returns [`CifraError::OutOfRangeInput`] if any character of
    /// `plain_text` lies outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Cifra;
    ///
    /// let cifra = Cifra::new();
    /// assert_eq!(cifra.encrypt_caesar("HELLO", 1).unwrap(), "IFMMP");
    /// assert_eq!(cifra.encrypt_caesar("_", 1).unwrap(), " ");
    /// assert!(cifra.encrypt_caesar("hello", 1).is_err());
    /// ```
    pub fn encrypt_caesar(&self, plain_text: &str, key: i32) -> Result<String, CifraError> {
        self.ensure_in_range(plain_text)?;
        Ok(caesar::encrypt(&self.alphabet, plain_text, key))
    }

    /// Decrypts `cipher_text` with the Caesar cipher.
    ///
    /// Exact inverse of [`encrypt_caesar`](Cifra::encrypt_caesar): each
    /// character is shifted `key` positions down the alphabet, wrapping
    /// circularly.
    ///
    /// # Parameters
    ///
    /// - `cipher_text`: Text to decrypt; every character must be in range.
    /// - `key`: Signed shift offset used at encryption time.
    ///
    /// # Errors
    ///
    /// Returns [`CifraError::OutOfRangeInput`] if any character of
    /// `cipher_text` lies outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Cifra;
    ///
    /// let cifra = Cifra::new();
    /// assert_eq!(cifra.decrypt_caesar("IFMMP", 1).unwrap(), "HELLO");
    /// assert_eq!(cifra.decrypt_caesar(" ", 1).unwrap(), "_");
    /// ```
    pub fn decrypt_caesar(&self, cipher_text: &str, key: i32) -> Result<String, CifraError> {
        self.ensure_in_range(cipher_text)?;
        Ok(caesar::decrypt(&self.alphabet, cipher_text, key))
    }

    /// Expands a Bellaso key into a key stream of `len` characters.
    ///
    /// The key repeats cyclically: position `i` of the stream is character
    /// `i mod key_len` of the key. The stream pairs with
    /// [`encrypt_with_key_stream`](Cifra::encrypt_with_key_stream) and
    /// [`decrypt_with_key_stream`](Cifra::decrypt_with_key_stream).
    ///
    /// # Parameters
    ///
    /// - `key`: Repeating key; must be non-empty and in range.
    /// - `len`: Character count of the stream to produce.
    ///
    /// # Errors
    ///
    /// Returns [`CifraError::EmptyKey`] if `key` is empty, or
    /// [`CifraError::OutOfRangeInput`] if it contains a character outside
    /// the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Cifra;
    ///
    /// let cifra = Cifra::new();
    /// assert_eq!(cifra.expand_key("XY", 5).unwrap(), "XYXYX");
    /// assert!(cifra.expand_key("", 5).is_err());
    /// ```
    pub fn expand_key(&self, key: &str, len: usize) -> Result<String, CifraError> {
        self.ensure_key_usable(key)?;
        Ok(bellaso::expand_key(key, len))
    }

    /// Encrypts `plain_text` with the Bellaso cipher.
    ///
    /// The key is expanded cyclically to the length of the text, then each
    /// character is shifted by the character code of its key-stream
    /// counterpart, wrapping inside the alphabet. A one-character key
    /// degenerates to a Caesar cipher keyed by that character's code.
    ///
    /// # Parameters
    ///
    /// - `plain_text`: Text to encrypt; every character must be in range.
    /// - `key`: Repeating key; must be non-empty and in range.
    ///
    /// # Returns
    ///
    /// The cipher text, with the same character count as `plain_text`.
    ///
    /// # Errors
    ///
    /// Returns [`CifraError::EmptyKey`] if `key` is empty — even for empty
    /// text — or [`CifraError::OutOfRangeInput`] if the key or the text
    /// contains a character outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Cifra;
    ///
    /// let cifra = Cifra::new();
    /// assert_eq!(cifra.encrypt_bellaso("HELLO", "KEY").unwrap(), "SJ%WT");
    /// ```
    ///
    /// An empty key is rejected before the text is even looked at:
    ///
    /// ```
    /// use cifra::{Cifra, error::CifraError};
    ///
    /// let cifra = Cifra::new();
    /// assert_eq!(cifra.encrypt_bellaso("HELLO", ""), Err(CifraError::EmptyKey));
    /// assert_eq!(cifra.encrypt_bellaso("", ""), Err(CifraError::EmptyKey));
    /// ```
    pub fn encrypt_bellaso(&self, plain_text: &str, key: &str) -> Result<String, CifraError> {
        self.ensure_key_usable(key)?;
        self.ensure_in_range(plain_text)?;
        let key_stream = bellaso::expand_key(key, plain_text.chars().count());
        Ok(bellaso::encrypt(&self.alphabet, plain_text, &key_stream))
    }

    /// Decrypts `cipher_text` with the Bellaso cipher.
    ///
    /// Exact inverse of [`encrypt_bellaso`](Cifra::encrypt_bellaso) for the
    /// same key: the key is expanded to the text length and each character
    /// is shifted down by its key-stream counterpart, in one shared pass
    /// over both strings.
    ///
    /// # Parameters
    ///
    /// - `cipher_text`: Text to decrypt; every character must be in range.
    /// - `key`: Repeating key used at encryption time.
    ///
    /// # Errors
    ///
    /// Returns [`CifraError::EmptyKey`] if `key` is empty, or
    /// [`CifraError::OutOfRangeInput`] if the key or the text contains a
    /// character outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Cifra;
    ///
    /// let cifra = Cifra::new();
    /// assert_eq!(cifra.decrypt_bellaso("SJ%WT", "KEY").unwrap(), "HELLO");
    /// ```
    pub fn decrypt_bellaso(&self, cipher_text: &str, key: &str) -> Result<String, CifraError> {
        self.ensure_key_usable(key)?;
        self.ensure_in_range(cipher_text)?;
        let key_stream = bellaso::expand_key(key, cipher_text.chars().count());
        Ok(bellaso::decrypt(&self.alphabet, cipher_text, &key_stream))
    }

    /// Encrypts `plain_text` against an already-expanded key stream.
    ///
    /// Skips key expansion: the stream must already have exactly one
    /// character per text character, as produced by
    /// [`expand_key`](Cifra::expand_key) or by an external key source.
    ///
    /// # Parameters
    ///
    /// - `plain_text`: Text to encrypt; every character must be in range.
    /// - `key_stream`: In-range stream with the same character count as
    ///   `plain_text`.
    ///
    /// # Errors
    ///
    /// Returns [`CifraError::LengthMismatch`] if the character counts
    /// differ, or [`CifraError::OutOfRangeInput`] if the text or the
    /// stream contains a character outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::{Cifra, error::CifraError};
    ///
    /// let cifra = Cifra::new();
    /// let key_stream = cifra.expand_key("KEY", 5).unwrap();
    /// assert_eq!(cifra.encrypt_with_key_stream("HELLO", &key_stream).unwrap(), "SJ%WT");
    /// assert_eq!(
    ///     cifra.encrypt_with_key_stream("HELLO", "KEY"),
    ///     Err(CifraError::LengthMismatch)
    /// );
    /// ```
    pub fn encrypt_with_key_stream(
        &self,
        plain_text: &str,
        key_stream: &str,
    ) -> Result<String, CifraError> {
        self.ensure_stream_matches(plain_text, key_stream)?;
        Ok(bellaso::encrypt(&self.alphabet, plain_text, key_stream))
    }

    /// Decrypts `cipher_text` against an already-expanded key stream.
    ///
    /// Exact inverse of
    /// [`encrypt_with_key_stream`](Cifra::encrypt_with_key_stream) for the
    /// same stream.
    ///
    /// # Parameters
    ///
    /// - `cipher_text`: Text to decrypt; every character must be in range.
    /// - `key_stream`: In-range stream with the same character count as
    ///   `cipher_text`.
    ///
    /// # Errors
    ///
    /// Returns [`CifraError::LengthMismatch`] if the character counts
    /// differ, or [`CifraError::OutOfRangeInput`] if the text or the
    /// stream contains a character outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Cifra;
    ///
    /// let cifra = Cifra::new();
    /// assert_eq!(cifra.decrypt_with_key_stream("SJ%WT", "KEYKE").unwrap(), "HELLO");
    /// ```
    pub fn decrypt_with_key_stream(
        &self,
        cipher_text: &str,
        key_stream: &str,
    ) -> Result<String, CifraError> {
        self.ensure_stream_matches(cipher_text, key_stream)?;
        Ok(bellaso::decrypt(&self.alphabet, cipher_text, key_stream))
    }

    /// Fails with `OutOfRangeInput` unless every character of `text` is in
    /// range.
    fn ensure_in_range(&self, text: &str) -> Result<(), CifraError> {
        if !self.alphabet.validate(text) {
            return Err(CifraError::OutOfRangeInput);
        }
        Ok(())
    }

    /// Fails unless `key` is non-empty and entirely in range. Emptiness is
    /// checked first so an empty key never reports a range error.
    fn ensure_key_usable(&self, key: &str) -> Result<(), CifraError> {
        if key.is_empty() {
            return Err(CifraError::EmptyKey);
        }
        self.ensure_in_range(key)
    }

    /// Fails unless `key_stream` matches `text` character for character in
    /// count and both are in range.
    fn ensure_stream_matches(&self, text: &str, key_stream: &str) -> Result<(), CifraError> {
        if text.chars().count() != key_stream.chars().count() {
            return Err(CifraError::LengthMismatch);
        }
        self.ensure_in_range(text)?;
        self.ensure_in_range(key_stream)
    }
}
