//! Entropy-maximizing guess selection

use super::calculator::{GuessMetrics, calculate_metrics};
use crate::core::{Code, Configuration};
use crate::solver::openings;
use crate::solver::strategy::Selector;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Candidate counts above this skip the O(n²) scan
pub const DEFAULT_SCAN_THRESHOLD: usize = 500;

/// Select the guess with the highest entropy over `candidates`
///
/// Ties go to the smaller worst-case bucket, then to the earlier guess in
/// `guesses`, so the result does not depend on how rayon splits the work.
/// Returns `None` if `guesses` is empty.
///
/// # Examples
/// ```
/// use strikeball_solver::core::Code;
/// use strikeball_solver::solver::entropy::select_best_guess;
///
/// let pool = vec![
///     Code::parse("9999").unwrap(),
///     Code::parse("1256").unwrap(),
/// ];
/// let candidates = vec![
///     Code::parse("1234").unwrap(),
///     Code::parse("5678").unwrap(),
/// ];
///
/// let (best, metrics) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "1256");
/// assert!(metrics.entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(guesses: &[Code], candidates: &[Code]) -> Option<(Code, GuessMetrics)> {
    guesses
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, *guess, calculate_metrics(guess, candidates)))
        .max_by(|(i1, _, m1), (i2, _, m2)| compare_metrics(m1, m2).then(i2.cmp(i1)))
        .map(|(_, guess, metrics)| (guess, metrics))
}

/// Order metrics so that the better guess compares greater
fn compare_metrics(a: &GuessMetrics, b: &GuessMetrics) -> Ordering {
    a.entropy
        .total_cmp(&b.entropy)
        .then(b.max_partition.cmp(&a.max_partition))
}

/// Information-theoretic selector
///
/// 1. Fixed opening guesses for the first turns where the configuration has them
/// 2. Above `scan_threshold` candidates, the first candidate
/// 3. Otherwise the candidate maximizing feedback entropy over the candidate set
#[derive(Debug, Clone)]
pub struct EntropySelector {
    openings: &'static [Code],
    scan_threshold: usize,
}

impl EntropySelector {
    /// Create a selector using the openings for `config`
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            openings: openings::entropy_openings(config),
            scan_threshold: DEFAULT_SCAN_THRESHOLD,
        }
    }

    /// Override the candidate count above which the full scan is skipped
    #[must_use]
    pub fn with_scan_threshold(mut self, scan_threshold: usize) -> Self {
        self.scan_threshold = scan_threshold;
        self
    }

    /// Drop the fixed openings so every turn is computed
    #[must_use]
    pub fn without_openings(mut self) -> Self {
        self.openings = &[];
        self
    }

    #[must_use]
    pub const fn scan_threshold(&self) -> usize {
        self.scan_threshold
    }
}

impl Selector for EntropySelector {
    fn select(&self, candidates: &[Code], turn: usize) -> Option<Code> {
        if let Some(opening) = openings::for_turn(self.openings, turn) {
            return Some(opening);
        }

        if candidates.len() > self.scan_threshold {
            return candidates.first().copied();
        }

        select_best_guess(candidates, candidates).map(|(best, _)| best)
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
    fn selects_highest_entropy() {
        let pool = codes(&["9999", "1234"]);
        let candidates = codes(&["1234", "1243", "2134", "5678"]);

        let (best, metrics) = select_best_guess(&pool, &candidates).unwrap();

        assert_eq!(best.to_string(), "1234");
        assert!(metrics.entropy > 1.0);
    }

    #[test]
    fn informative_guess_beats_blank() {
        let candidates = codes(&["12", "21", "34", "43"]);
        // "13" splits 2/2; "56" scores OUT against everything
        let pool = codes(&["56", "13"]);

        let (best, metrics) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.to_string(), "13");
        assert_eq!(metrics.max_partition, 2);
    }

    #[test]
    fn equal_entropy_prefers_smaller_worst_case() {
        let balanced = GuessMetrics {
            entropy: 1.5,
            expected_remaining: 3.0,
            max_partition: 3,
        };
        let lopsided = GuessMetrics {
            max_partition: 5,
            ..balanced
        };

        assert_eq!(compare_metrics(&balanced, &lopsided), Ordering::Greater);
        assert_eq!(compare_metrics(&lopsided, &balanced), Ordering::Less);
        assert_eq!(compare_metrics(&balanced, &balanced), Ordering::Equal);
    }

    #[test]
    fn higher_entropy_wins_over_worst_case() {
        let better = GuessMetrics {
            entropy: 2.0,
            expected_remaining: 3.0,
            max_partition: 9,
        };
        let worse = GuessMetrics {
            entropy: 1.0,
            expected_remaining: 3.0,
            max_partition: 1,
        };
        assert_eq!(compare_metrics(&better, &worse), Ordering::Greater);
    }

    #[test]
    fn equal_metrics_prefer_earlier_guess() {
        let candidates = codes(&["1234"]);
        let pool = codes(&["5678", "6789", "7890"]);

        for _ in 0..5 {
            let (best, _) = select_best_guess(&pool, &candidates).unwrap();
            assert_eq!(best.to_string(), "5678");
        }
    }

    #[test]
    fn returns_none_on_empty_guess_pool() {
        let candidates = codes(&["1234"]);
        assert!(select_best_guess(&[], &candidates).is_none());
    }

    #[test]
    fn first_turn_uses_opening() {
        let selector = EntropySelector::new(Configuration::standard());
        let space = generate(Configuration::standard());

        assert_eq!(selector.select(&space, 1), Some(code("1234")));
        assert_eq!(selector.select(&space, 2), Some(code("5678")));
    }

    #[test]
    fn leading_zero_rules_open_with_zero() {
        let config = Configuration::new(4, false, true).unwrap();
        let selector = EntropySelector::new(config);
        let space = generate(config);

        assert_eq!(selector.select(&space, 1), Some(code("0123")));
    }

    #[test]
    fn large_sets_fall_back_to_first_candidate() {
        let config = Configuration::standard();
        let selector = EntropySelector::new(config);
        let space = generate(config);

        assert!(space.len() > selector.scan_threshold());
        assert_eq!(selector.select(&space, 3), space.first().copied());
    }

    #[test]
    fn small_sets_are_scanned() {
        let config = Configuration::standard();
        let selector = EntropySelector::new(config);
        let space = generate(config);
        let opening = code("1234");
        let candidates = filter_candidates(&space, &opening, Feedback::new(0, 4));

        let guess = selector.select(&candidates, 3).unwrap();
        let expected = select_best_guess(&candidates, &candidates).map(|(g, _)| g);

        assert_eq!(Some(guess), expected);
        assert!(candidates.contains(&guess));
    }

    #[test]
    fn threshold_can_be_lowered() {
        let candidates = codes(&["1234", "1243", "2134"]);
        let selector = EntropySelector::new(Configuration::standard())
            .without_openings()
            .with_scan_threshold(2);

        assert_eq!(selector.select(&candidates, 1), Some(candidates[0]));
    }

    #[test]
    fn empty_set_without_opening_returns_none() {
        let selector = EntropySelector::new(Configuration::standard());
        assert_eq!(selector.select(&[], 5), None);
    }
}
