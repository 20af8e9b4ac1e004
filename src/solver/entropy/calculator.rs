//! Shannon entropy calculation for strike/ball feedback
//!
//! Given a guess and set of candidates, computes the expected information gain
//! and how badly the guess can go in the worst case.

use crate::core::{Code, Feedback};

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest feedback bucket (worst-case remaining candidates)
    pub max_partition: usize,
}

impl GuessMetrics {
    const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
    };
}

/// Count how many candidates fall into each feedback bucket for `guess`
///
/// Buckets are indexed by [`Feedback::index`]; entries for impossible
/// signatures stay zero.
#[must_use]
pub fn feedback_distribution(guess: &Code, candidates: &[Code]) -> Vec<usize> {
    let n = guess.len();
    let mut counts = vec![0usize; Feedback::index_count(n)];

    for candidate in candidates {
        counts[Feedback::calculate(guess, candidate).index(n)] += 1;
    }

    counts
}

/// Calculate Shannon entropy from bucket counts
///
/// H = -Σ p * log₂(p)
///
/// Counts are summed smallest first so two guesses with the same bucket sizes
/// in a different arrangement get bit-identical entropy.
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one bucket holds everything)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n non-empty buckets
///
/// # Examples
/// ```
/// use strikeball_solver::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 25, 0, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total = counts.iter().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let mut nonzero: Vec<usize> = counts.iter().copied().filter(|&c| c > 0).collect();
    nonzero.sort_unstable();

    nonzero
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate Shannon entropy of the feedback distribution `guess` induces
///
/// # Examples
/// ```
/// use strikeball_solver::core::Code;
/// use strikeball_solver::solver::entropy::calculate_entropy;
///
/// let guess = Code::parse("1234").unwrap();
/// let candidates = vec![
///     Code::parse("1234").unwrap(),
///     Code::parse("5678").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 0.001); // Perfect binary split
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(&feedback_distribution(guess, candidates))
}

/// Calculate entropy, expected remaining and worst-case bucket for a guess
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics::EMPTY;
    }

    let counts = feedback_distribution(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining = counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.iter().copied().max().unwrap_or(0),
    }
}
