//! Frequency-heuristic guess selection

use super::calculator::PositionHistogram;
use crate::core::{Code, Configuration};
use crate::solver::openings;
use crate::solver::strategy::Selector;

/// Select the candidate whose digits are most common at their positions
///
/// The earliest candidate wins ties. Returns `None` for an empty set.
///
/// # Examples
/// ```
/// use strikeball_solver::core::Code;
/// use strikeball_solver::solver::frequency::select_most_frequent;
///
/// let candidates = vec![
///     Code::parse("12").unwrap(),
///     Code::parse("34").unwrap(),
///     Code::parse("14").unwrap(),
/// ];
///
/// // "14" shares its first digit with "12" and its second with "34"
/// assert_eq!(select_most_frequent(&candidates), Some(candidates[2]));
/// ```
#[must_use]
pub fn select_most_frequent(candidates: &[Code]) -> Option<Code> {
    let histogram = PositionHistogram::build(candidates);

    let mut best: Option<(Code, usize)> = None;
    for candidate in candidates {
        let score = histogram.score(candidate);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((*candidate, score));
        }
    }

    best.map(|(code, _)| code)
}

/// Positional frequency selector
///
/// 1. A lone candidate is returned as is
/// 2. Fixed opening guesses where the configuration has them
/// 3. Otherwise the candidate with the highest histogram score
#[derive(Debug, Clone)]
pub struct FrequencySelector {
    openings: &'static [Code],
}

impl FrequencySelector {
    /// Create a selector using the openings for `config`
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            openings: openings::frequency_openings(config),
        }
    }

    /// Drop the fixed openings so every turn is scored
    #[must_use]
    pub fn without_openings(mut self) -> Self {
        self.openings = &[];
        self
    }
}

impl Selector for FrequencySelector {
    fn select(&self, candidates: &[Code], turn: usize) -> Option<Code> {
        if let [only] = candidates {
            return Some(*only);
        }

        if let Some(opening) = openings::for_turn(self.openings, turn) {
            return Some(opening);
        }

        select_most_frequent(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::space::{filter_candidates, generate};

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    fn codes(list: &[&str]) -> Vec<Code> {
        list.iter().copied().map(code).collect()
    }

    #[test]
    fn single_candidate_is_returned_before_openings() {
        let config = Configuration::new(4, true, false).unwrap();
        let selector = FrequencySelector::new(config);
        let only = codes(&["9090"]);

        assert_eq!(selector.select(&only, 1), Some(only[0]));
    }

    #[test]
    fn duplicate_rules_use_openings() {
        let config = Configuration::new(4, true, true).unwrap();
        let selector = FrequencySelector::new(config);
        let space = generate(config);

        assert_eq!(selector.select(&space, 1), Some(code("1234")));
        assert_eq!(selector.select(&space, 2), Some(code("5678")));
        assert_ne!(selector.select(&space, 3), Some(code("1234")));
    }

    #[test]
    fn standard_rules_score_from_first_turn() {
        let config = Configuration::standard();
        let selector = FrequencySelector::new(config);
        let space = generate(config);

        // Zero is the most common digit after the first position, and 1023 is
        // the earliest code holding one
        assert_eq!(selector.select(&space, 1), Some(code("1023")));
        assert_eq!(space.first().copied(), Some(code("1023")));
    }

    #[test]
    fn earliest_candidate_wins_ties() {
        let candidates = codes(&["12", "21"]);
        assert_eq!(select_most_frequent(&candidates), Some(candidates[0]));
    }

    #[test]
    fn picks_highest_score() {
        let candidates = codes(&["56", "12", "13", "42"]);
        // Scores: 56 -> 2, 12 -> 4, 13 -> 3, 42 -> 3
        assert_eq!(select_most_frequent(&candidates), Some(candidates[1]));
    }

    #[test]
    fn empty_set_returns_none() {
        let selector = FrequencySelector::new(Configuration::standard());
        assert_eq!(selector.select(&[], 3), None);
        assert_eq!(select_most_frequent(&[]), None);
    }

    #[test]
    fn guess_stays_in_candidate_set() {
        let config = Configuration::standard();
        let selector = FrequencySelector::new(config).without_openings();
        let space = generate(config);
        let opening = code("1234");
        let candidates = filter_candidates(&space, &opening, Feedback::new(1, 1));

        let guess = selector.select(&candidates, 2).unwrap();
        assert!(candidates.contains(&guess));
    }
}
