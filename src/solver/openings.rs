//! Precomputed opening guesses
//!
//! Scanning the full space on the first turns would cost up to 10,000²
//! feedback evaluations, so the first guesses are fixed per rule variant.
//! The entropy openings walk the alphabet in blocks of four, starting from 1
//! when a leading zero is forbidden (so the opening is itself a legal code)
//! and from 0 otherwise. The frequency strategy only opens this way when
//! duplicates are allowed.

use crate::core::{Code, Configuration};

const ROTATED_OPENINGS: &[Code] = &[
    Code::from_array([1, 2, 3, 4]),
    Code::from_array([5, 6, 7, 8]),
];

const ZERO_FIRST_OPENINGS: &[Code] = &[
    Code::from_array([0, 1, 2, 3]),
    Code::from_array([4, 5, 6, 7]),
];

/// Fixed openings of the entropy strategy for `config`
///
/// Only four-digit rule sets have openings; other lengths are computed from
/// the first turn.
#[must_use]
pub fn entropy_openings(config: Configuration) -> &'static [Code] {
    match (config.code_length(), config.allow_leading_zero()) {
        (4, false) => ROTATED_OPENINGS,
        (4, true) => ZERO_FIRST_OPENINGS,
        _ => &[],
    }
}

/// Fixed openings of the frequency strategy for `config`
#[must_use]
pub fn frequency_openings(config: Configuration) -> &'static [Code] {
    match (config.code_length(), config.allow_duplicates()) {
        (4, true) => ROTATED_OPENINGS,
        _ => &[],
    }
}

/// The opening for a 1-based `turn`, if there is one
#[inline]
#[must_use]
pub fn for_turn(openings: &[Code], turn: usize) -> Option<Code> {
    turn.checked_sub(1)
        .and_then(|index| openings.get(index))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dups: bool, zero: bool) -> Configuration {
        Configuration::new(4, dups, zero).unwrap()
    }

    #[test]
    fn entropy_openings_per_variant() {
        assert_eq!(entropy_openings(config(false, false)), ROTATED_OPENINGS);
        assert_eq!(entropy_openings(config(true, false)), ROTATED_OPENINGS);
        assert_eq!(entropy_openings(config(false, true)), ZERO_FIRST_OPENINGS);
        assert_eq!(entropy_openings(config(true, true)), ZERO_FIRST_OPENINGS);
    }

    #[test]
    fn frequency_openings_only_with_duplicates() {
        assert!(frequency_openings(config(false, false)).is_empty());
        assert!(frequency_openings(config(false, true)).is_empty());
        assert_eq!(frequency_openings(config(true, false)), ROTATED_OPENINGS);
        assert_eq!(frequency_openings(config(true, true)), ROTATED_OPENINGS);
    }

    #[test]
    fn openings_are_legal_codes() {
        for (dups, zero) in [(false, false), (false, true), (true, false), (true, true)] {
            let config = config(dups, zero);
            let entropy = entropy_openings(config);
            for opening in entropy.iter().chain(frequency_openings(config)) {
                assert!(config.admits(opening), "{opening} under {config}");
            }
        }
    }

    #[test]
    fn other_lengths_have_no_openings() {
        let config = Configuration::new(3, false, false).unwrap();
        assert!(entropy_openings(config).is_empty());
        assert!(frequency_openings(config).is_empty());
    }

    #[test]
    fn for_turn_is_one_based() {
        assert_eq!(for_turn(ROTATED_OPENINGS, 0), None);
        assert_eq!(for_turn(ROTATED_OPENINGS, 1), Some(ROTATED_OPENINGS[0]));
        assert_eq!(for_turn(ROTATED_OPENINGS, 2), Some(ROTATED_OPENINGS[1]));
        assert_eq!(for_turn(ROTATED_OPENINGS, 3), None);
        assert_eq!(for_turn(&[], 1), None);
    }
}
