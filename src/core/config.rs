//! Game rule configuration
//!
//! A Configuration fixes the code length and the duplicate / leading-zero
//! policies, and with them the full candidate space.

use crate::core::{ALPHABET_SIZE, Code, MAX_CODE_LENGTH};
use crate::error::SolverError;
use std::fmt;

/// Largest candidate space the solver will enumerate
pub const MAX_SPACE_SIZE: usize = 1_000_000;

/// Structural rules defining a candidate space
///
/// Immutable for the lifetime of a session. Hashable so it can key the space cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    code_length: usize,
    allow_duplicates: bool,
    allow_leading_zero: bool,
}

impl Configuration {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfiguration` if:
    /// - `code_length` is zero or longer than 10
    /// - the rules admit no codes at all
    /// - the space would exceed [`MAX_SPACE_SIZE`] codes
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::Configuration;
    ///
    /// let config = Configuration::new(4, false, false).unwrap();
    /// assert_eq!(config.space_size(), 4536);
    ///
    /// assert!(Configuration::new(0, false, false).is_err());
    /// ```
    pub fn new(
        code_length: usize,
        allow_duplicates: bool,
        allow_leading_zero: bool,
    ) -> Result<Self, SolverError> {
        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(SolverError::InvalidConfiguration(format!(
                "code length must be between 1 and {MAX_CODE_LENGTH}, got {code_length}"
            )));
        }

        let config = Self {
            code_length,
            allow_duplicates,
            allow_leading_zero,
        };

        match config.checked_space_size() {
            Some(0) => {
                let message = format!("no codes satisfy {config}");
                Err(SolverError::InvalidConfiguration(message))
            }
            Some(size) if size <= MAX_SPACE_SIZE => Ok(config),
            _ => Err(SolverError::InvalidConfiguration(format!(
                "{config} has more than {MAX_SPACE_SIZE} codes"
            ))),
        }
    }

    /// The standard rules: 4 distinct digits, no leading zero
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            code_length: 4,
            allow_duplicates: false,
            allow_leading_zero: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    #[inline]
    #[must_use]
    pub const fn allow_leading_zero(&self) -> bool {
        self.allow_leading_zero
    }

    /// Closed-form number of codes these rules admit
    ///
    /// Always fits because construction rejects oversized spaces.
    #[must_use]
    pub fn space_size(&self) -> usize {
        self.checked_space_size().unwrap_or(usize::MAX)
    }

    fn checked_space_size(&self) -> Option<usize> {
        let n = self.code_length;
        // Choices for the first position, then for each later position
        let first = if self.allow_leading_zero {
            ALPHABET_SIZE
        } else {
            ALPHABET_SIZE - 1
        };

        let mut total = first;
        for position in 1..n {
            let choices = if self.allow_duplicates {
                ALPHABET_SIZE
            } else {
                ALPHABET_SIZE.checked_sub(position)?
            };
            total = total.checked_mul(choices)?;
        }
        Some(total)
    }

    /// Whether a code obeys these rules
    #[must_use]
    pub fn admits(&self, code: &Code) -> bool {
        code.len() == self.code_length
            && (self.allow_leading_zero || code.digit_at(0) != 0)
            && (self.allow_duplicates || !code.has_duplicates())
    }

    /// Validate that a code has the right length for these rules
    ///
    /// # Errors
    /// Returns `SolverError::CodeLengthMismatch` otherwise.
    pub fn check_length(&self, code: &Code) -> Result<(), SolverError> {
        if code.len() == self.code_length {
            Ok(())
        } else {
            Err(SolverError::CodeLengthMismatch {
                expected: self.code_length,
                actual: code.len(),
            })
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} digits, duplicates {}, leading zero {}",
            self.code_length,
            policy(self.allow_duplicates),
            policy(self.allow_leading_zero),
        )
    }
}

const fn policy(allowed: bool) -> &'static str {
    if allowed { "allowed" } else { "forbidden" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_sizes_for_four_digits() {
        let cases = [
            (false, false, 4536),
            (false, true, 5040),
            (true, false, 9000),
            (true, true, 10000),
        ];
        for (dups, zero, expected) in cases {
            let config = Configuration::new(4, dups, zero).unwrap();
            assert_eq!(config.space_size(), expected, "{config}");
        }
    }

    fn size(length: usize, dups: bool, zero: bool) -> usize {
        Configuration::new(length, dups, zero).unwrap().space_size()
    }

    #[test]
    fn space_sizes_other_lengths() {
        assert_eq!(size(1, false, true), 10);
        assert_eq!(size(1, false, false), 9);
        assert_eq!(size(3, false, false), 648);
        assert_eq!(size(5, true, true), 100_000);
    }

    #[test]
    fn invalid_lengths_rejected() {
        assert!(matches!(
            Configuration::new(0, true, true),
            Err(SolverError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Configuration::new(11, false, true),
            Err(SolverError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn oversized_spaces_rejected() {
        // 10^7 codes
        assert!(Configuration::new(7, true, true).is_err());
        // 10!/3! = 604,800 codes fits
        assert!(Configuration::new(7, false, true).is_ok());
        // 10!/2! = 1,814,400 does not
        assert!(Configuration::new(8, false, true).is_err());
    }

    #[test]
    fn default_is_standard() {
        let config = Configuration::default();
        assert_eq!(config.code_length(), 4);
        assert!(!config.allow_duplicates());
        assert!(!config.allow_leading_zero());
    }

    #[test]
    fn admits_respects_rules() {
        let standard = Configuration::standard();
        assert!(standard.admits(&Code::parse("1234").unwrap()));
        assert!(!standard.admits(&Code::parse("0123").unwrap()));
        assert!(!standard.admits(&Code::parse("1123").unwrap()));
        assert!(!standard.admits(&Code::parse("123").unwrap()));

        let loose = Configuration::new(4, true, true).unwrap();
        assert!(loose.admits(&Code::parse("0000").unwrap()));
    }

    #[test]
    fn check_length_reports_mismatch() {
        let config = Configuration::standard();
        assert!(config.check_length(&Code::parse("1234").unwrap()).is_ok());
        assert_eq!(
            config.check_length(&Code::parse("12345").unwrap()),
            Err(SolverError::CodeLengthMismatch {
                expected: 4,
                actual: 5,
            })
        );
    }
}
