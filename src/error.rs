//! Error types for the cifra library.
//!
//! Every fallible operation in the crate reports one of the [`CifraError`]
//! variants below. The variants carry no payload: each one identifies a
//! distinct precondition violation, and the offending input is always the
//! argument the caller just passed in.

use std::fmt;

/// Errors produced by the cifra library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CifraError {
    /// The text or key contains a character outside the alphabet range.
    OutOfRangeInput,
    /// The Bellaso key is empty, so no key stream can be derived from it.
    EmptyKey,
    /// A pre-expanded key stream does not have the same character count
    /// as the text it is applied to.
    LengthMismatch,
    /// The requested alphabet bounds are not an ascending ASCII range.
    InvalidAlphabet,
}

impl fmt::Display for CifraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CifraError::OutOfRangeInput => {
                write!(f, "Input contains a character outside the alphabet range")
            }
            CifraError::EmptyKey => {
                write!(f, "Bellaso key must be at least 1 character long")
            }
            CifraError::LengthMismatch => {
                write!(f, "Key stream length does not match the text length")
            }
            CifraError::InvalidAlphabet => {
                write!(f, "Alphabet bounds must be an ascending ASCII range")
            }
        }
    }
}

impl std::error::Error for CifraError {}
