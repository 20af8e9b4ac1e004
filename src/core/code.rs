//! Secret code representation
//!
//! A Code stores up to [`MAX_CODE_LENGTH`] digits inline so it can be copied
//! freely through the hot filtering and scoring loops.

use std::fmt;
use thiserror::Error;

/// Number of distinct symbols a position can take (digits 0-9)
pub const ALPHABET_SIZE: usize = 10;

/// Longest supported code
pub const MAX_CODE_LENGTH: usize = 10;

/// An ordered sequence of digits, immutable once constructed
///
/// Unused trailing slots are always zero, so the derived equality, hashing
/// and ordering behave as for the visible digits of same-length codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: [u8; MAX_CODE_LENGTH],
    len: u8,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must have between 1 and 10 digits, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a digit")]
    InvalidDigit(char),
    #[error("digit value {0} is outside 0-9")]
    DigitOutOfRange(u8),
}

impl Code {
    /// Build a code from a fixed array of digits
    ///
    /// Intended for compile-time constants such as opening guesses.
    ///
    /// # Panics
    /// Panics if `N` is zero or exceeds [`MAX_CODE_LENGTH`], or if any digit is
    /// outside the alphabet. In a `const` context this is a compile error.
    #[must_use]
    pub const fn from_array<const N: usize>(values: [u8; N]) -> Self {
        assert!(N > 0 && N <= MAX_CODE_LENGTH, "invalid code length");
        let mut digits = [0u8; MAX_CODE_LENGTH];
        let mut i = 0;
        while i < N {
            assert!((values[i] as usize) < ALPHABET_SIZE, "digit out of range");
            digits[i] = values[i];
            i += 1;
        }
        Self {
            digits,
            len: N as u8,
        }
    }

    /// Build a code from a slice of digit values
    ///
    /// # Errors
    /// Returns `CodeError` if the slice is empty, too long, or holds a value
    /// greater than 9.
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::Code;
    ///
    /// let code = Code::from_digits(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    /// assert!(Code::from_digits(&[1, 12]).is_err());
    /// ```
    pub fn from_digits(values: &[u8]) -> Result<Self, CodeError> {
        if values.is_empty() || values.len() > MAX_CODE_LENGTH {
            return Err(CodeError::InvalidLength(values.len()));
        }

        let mut digits = [0u8; MAX_CODE_LENGTH];
        for (slot, &value) in digits.iter_mut().zip(values) {
            if usize::from(value) >= ALPHABET_SIZE {
                return Err(CodeError::DigitOutOfRange(value));
            }
            *slot = value;
        }

        Ok(Self {
            digits,
            len: values.len() as u8,
        })
    }

    /// Parse a code from text such as `"0123"`
    ///
    /// Whitespace between digits is ignored.
    ///
    /// # Errors
    /// Returns `CodeError` for non-digit characters or an invalid length.
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::Code;
    ///
    /// let code = Code::parse("0 1 2 3").unwrap();
    /// assert_eq!(code.digits(), &[0, 1, 2, 3]);
    /// assert!(Code::parse("12a4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let mut values = Vec::with_capacity(MAX_CODE_LENGTH);
        for ch in text.chars().filter(|c| !c.is_whitespace()) {
            let digit = ch.to_digit(10).ok_or(CodeError::InvalidDigit(ch))?;
            values.push(digit as u8);
        }
        Self::from_digits(&values)
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Codes always hold at least one digit
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digits as a slice
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// The digit at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> u8 {
        self.digits()[position]
    }

    /// Whether any digit appears more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = [false; ALPHABET_SIZE];
        self.digits().iter().any(|&d| {
            let repeated = seen[usize::from(d)];
            seen[usize::from(d)] = true;
            repeated
        })
    }

    /// Count of each digit value in the code
    #[inline]
    pub(crate) fn digit_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &d in self.digits() {
            counts[usize::from(d)] += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::parse("1234").unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.digits(), &[1, 2, 3, 4]);
        assert_eq!(code.to_string(), "1234");
    }

    #[test]
    fn code_keeps_leading_zero() {
        let code = Code::parse("0987").unwrap();
        assert_eq!(code.digit_at(0), 0);
        assert_eq!(code.to_string(), "0987");
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::parse(""), Err(CodeError::InvalidLength(0)));
        let parsed = Code::parse("12345678901");
        assert_eq!(parsed, Err(CodeError::InvalidLength(11)));
    }

    #[test]
    fn code_creation_invalid_characters() {
        assert_eq!(Code::parse("12a4"), Err(CodeError::InvalidDigit('a')));
        assert!(Code::parse("12-4").is_err());
        assert_eq!(
            Code::from_digits(&[1, 2, 10]),
            Err(CodeError::DigitOutOfRange(10))
        );
    }

    #[test]
    fn code_from_array_matches_parse() {
        const OPENING: Code = Code::from_array([5, 6, 7, 8]);
        assert_eq!(OPENING, Code::parse("5678").unwrap());
    }

    #[test]
    fn code_equality_depends_on_length() {
        let short = Code::parse("12").unwrap();
        let long = Code::parse("120").unwrap();
        assert_ne!(short, long);
    }

    #[test]
    fn code_ordering_is_lexicographic() {
        let a = Code::parse("0123").unwrap();
        let b = Code::parse("0132").unwrap();
        let c = Code::parse("1023").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn code_duplicates() {
        assert!(!Code::parse("1234").unwrap().has_duplicates());
        assert!(Code::parse("1231").unwrap().has_duplicates());
        assert!(Code::parse("0000").unwrap().has_duplicates());
    }

    #[test]
    fn code_digit_counts() {
        let counts = Code::parse("1121").unwrap().digit_counts();
        assert_eq!(counts[1], 3);
        assert_eq!(counts[2], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 4);
    }
}
