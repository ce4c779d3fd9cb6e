//! Alphabet: the contiguous character-code range a cipher operates on.
//!
//! The canonical range spans ASCII codes 32 (space) through 95
//! (underscore), a 64-symbol alphabet covering the uppercase letters,
//! digits, space, and common punctuation. Lowercase letters sit above the
//! range and are rejected by validation.
//!
//! All modular offset arithmetic is centralized here: [`Alphabet::wrap`]
//! reduces any signed character-code value into the range with a single
//! floor-modulo step, so no caller ever loops to correct an overshoot and
//! offsets of any magnitude or sign land correctly.

use crate::error::CifraError;

/// Lowest character code of the canonical alphabet (ASCII 32, space).
pub const LOWER_BOUND: char = ' ';

/// Highest character code of the canonical alphabet (ASCII 95, underscore).
pub const UPPER_BOUND: char = '_';

/// Contiguous inclusive range of ASCII character codes.
///
/// An `Alphabet` defines which characters a cipher accepts and the modulus
/// of its offset arithmetic. The canonical range is
/// [`LOWER_BOUND`]`..=`[`UPPER_BOUND`] (64 symbols); custom ranges allow
/// textbook alphabets such as `'A'..='Z'` without touching the transforms.
///
/// # Examples
///
/// ```
/// use cifra::Alphabet;
///
/// let canonical = Alphabet::canonical();
/// assert_eq!(canonical.size(), 64);
/// assert!(canonical.contains('A'));
/// assert!(!canonical.contains('a'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    lower: char,
    upper: char,
}

impl Default for Alphabet {
    /// Returns the canonical 64-symbol alphabet.
    fn default() -> Self {
        Self::canonical()
    }
}

impl Alphabet {
    /// Creates the canonical alphabet spanning codes 32 through 95.
    pub const fn canonical() -> Self {
        Alphabet {
            lower: LOWER_BOUND,
            upper: UPPER_BOUND,
        }
    }

    /// Creates an alphabet over the inclusive range `lower..=upper`.
    ///
    /// # Parameters
    ///
    /// - `lower`: First character of the range.
    /// - `upper`: Last character of the range.
    ///
    /// # Errors
    ///
    /// Returns [`CifraError::InvalidAlphabet`] if either bound is not an
    /// ASCII character or if `lower` does not precede or equal `upper`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Alphabet;
    ///
    /// let letters = Alphabet::new('A', 'Z').unwrap();
    /// assert_eq!(letters.size(), 26);
    /// assert!(Alphabet::new('Z', 'A').is_err());
    /// ```
    pub fn new(lower: char, upper: char) -> Result<Self, CifraError> {
        if !lower.is_ascii() || !upper.is_ascii() || lower > upper {
            return Err(CifraError::InvalidAlphabet);
        }
        Ok(Alphabet { lower, upper })
    }

    /// Returns the first character of the range.
    pub fn lower(&self) -> char {
        self.lower
    }

    /// Returns the last character of the range.
    pub fn upper(&self) -> char {
        self.upper
    }

    /// Returns the number of symbols in the range.
    pub fn size(&self) -> u32 {
        self.upper as u32 - self.lower as u32 + 1
    }

    /// Returns `true` if `c` lies within the range.
    pub fn contains(&self, c: char) -> bool {
        self.lower <= c && c <= self.upper
    }

    /// Returns `true` if every character of `text` lies within the range.
    ///
    /// Stops scanning at the first out-of-range character. The empty
    /// string is vacuously valid. Purely observational: calling this never
    /// changes the outcome of any later operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cifra::Alphabet;
    ///
    /// let alphabet = Alphabet::canonical();
    /// assert!(alphabet.validate("HELLO WORLD_"));
    /// assert!(!alphabet.validate("hello"));
    /// ```
    pub fn validate(&self, text: &str) -> bool {
        text.chars().all(|c| self.contains(c))
    }

    /// Reduces a signed character-code value into the range.
    ///
    /// Single-step floor modulo: `lower + (value - lower).rem_euclid(size)`.
    /// Values any distance above or below the range, including negative
    /// ones, are folded back in one operation. Arithmetic runs in `i64`,
    /// which cannot overflow for ASCII codes combined with `i32` offsets.
    pub(crate) fn wrap(&self, value: i64) -> char {
        let lower = self.lower as i64;
        let size = i64::from(self.size());
        let code = lower + (value - lower).rem_euclid(size);
        // code is inside an ASCII-bounded range by construction
        char::from_u32(code as u32).expect("wrapped code is a valid ASCII character")
    }
}
