//! Full candidate space enumeration

use crate::core::{ALPHABET_SIZE, Code, Configuration};
use itertools::Itertools;

/// Enumerate every code admitted by `config`, in lexicographic order
///
/// - duplicates allowed: all 10^N digit sequences
/// - duplicates forbidden: all N-permutations of the ten digits
///
/// Codes starting with 0 are then dropped if the leading zero is forbidden.
/// This is the expensive step of a session; see [`super::SpaceCache`] to share
/// the result between sessions.
///
/// # Examples
/// ```
/// use strikeball_solver::core::Configuration;
/// use strikeball_solver::space::generate;
///
/// let config = Configuration::new(2, false, false).unwrap();
/// let space = generate(config);
///
/// assert_eq!(space.len(), 81);
/// assert_eq!(space[0].to_string(), "10");
/// ```
#[must_use]
pub fn generate(config: Configuration) -> Vec<Code> {
    let n = config.code_length();
    let digits = 0..ALPHABET_SIZE as u8;

    let sequences: Box<dyn Iterator<Item = Vec<u8>>> = if config.allow_duplicates() {
        let columns = (0..n).map(move |_| digits.clone());
        Box::new(columns.multi_cartesian_product())
    } else {
        Box::new(digits.permutations(n))
    };

    let mut space = Vec::with_capacity(config.space_size());
    space.extend(
        sequences
            .filter(|seq| config.allow_leading_zero() || seq[0] != 0)
            .filter_map(|seq| Code::from_digits(&seq).ok()),
    );
    space
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_closed_form() {
        for (dups, zero) in [(false, false), (false, true), (true, false), (true, true)] {
            let config = Configuration::new(4, dups, zero).unwrap();
            assert_eq!(generate(config).len(), config.space_size(), "{config}");
        }
    }

    #[test]
    fn standard_space_is_4536() {
        assert_eq!(generate(Configuration::standard()).len(), 4536);
    }

    #[test]
    fn every_code_is_admitted() {
        for (dups, zero) in [(false, false), (true, false)] {
            let config = Configuration::new(3, dups, zero).unwrap();
            assert!(generate(config).iter().all(|c| config.admits(c)));
        }
    }

    #[test]
    fn codes_are_unique_and_sorted() {
        let space = generate(Configuration::new(4, false, true).unwrap());
        assert!(space.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn enumeration_order() {
        let space = generate(Configuration::new(4, true, true).unwrap());
        assert_eq!(space[0].to_string(), "0000");
        assert_eq!(space[1].to_string(), "0001");
        assert_eq!(space[9999].to_string(), "9999");

        let space = generate(Configuration::standard());
        assert_eq!(space[0].to_string(), "1023");
        let last = space.last().map(ToString::to_string);
        assert_eq!(last.as_deref(), Some("9876"));
    }

    #[test]
    fn single_digit_space() {
        let space = generate(Configuration::new(1, false, false).unwrap());
        let text: Vec<String> = space.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    }
}
