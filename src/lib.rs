//! Cifra classical substitution cipher engine.
//!
//! Cifra implements two classical substitution ciphers over a restricted
//! printable character range: the fixed-offset Caesar cipher and the
//! repeating-key polyalphabetic Bellaso cipher. The canonical alphabet
//! spans ASCII codes 32 (space) through 95 (underscore) — 64 symbols
//! covering the uppercase letters, digits, space, and common punctuation.
//!
//! These ciphers are of historical and educational interest only: they are
//! trivially breakable and must never be used to protect real data.
//!
//! # Architecture
//!
//! ```text
//! Alphabet  (contiguous ASCII code range — character domain + modular wrap)
//!     ↕ shared by
//! caesar    (fixed-offset substitution)
//! bellaso   (repeating-key substitution + cyclic key expansion)
//!     ↕ orchestrated by
//! Cifra     (engine — validation policy + public cipher operations)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the Caesar cipher:
//!
//! ```
//! use cifra::Cifra;
//!
//! let cifra = Cifra::new();
//!
//! let cipher_text = cifra.encrypt_caesar("ATTACK AT DAWN", 3).unwrap();
//! assert_eq!(cipher_text, "DWWDFN#DW#GDZQ");
//! assert_eq!(cifra.decrypt_caesar(&cipher_text, 3).unwrap(), "ATTACK AT DAWN");
//! ```
//!
//! Encrypt and decrypt with a repeating Bellaso key:
//!
//! ```
//! use cifra::Cifra;
//!
//! let cifra = Cifra::new();
//!
//! let cipher_text = cifra.encrypt_bellaso("HELLO", "KEY").unwrap();
//! assert_eq!(cipher_text, "SJ%WT");
//! assert_eq!(cifra.decrypt_bellaso(&cipher_text, "KEY").unwrap(), "HELLO");
//! ```
//!
//! Run the ciphers over a custom alphabet:
//!
//! ```
//! use cifra::{Alphabet, Cifra};
//!
//! let letters = Alphabet::new('A', 'Z').unwrap();
//! let cifra = Cifra::with_alphabet(letters);
//!
//! assert_eq!(cifra.encrypt_caesar("XYZZY", 3).unwrap(), "ABCCB");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

pub(crate) mod bellaso;
pub(crate) mod caesar;

mod cifra;

pub use alphabet::Alphabet;
pub use cifra::Cifra;
