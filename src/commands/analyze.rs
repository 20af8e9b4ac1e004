//! Guess analysis command
//!
//! Analyzes the entropy and feedback split of a specific guess.

use crate::core::{Code, Configuration, Feedback};
use crate::error::SolverError;
use crate::solver::entropy::{calculate_metrics, feedback_distribution};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Non-empty feedback buckets, largest first
    pub buckets: Vec<(Feedback, usize)>,
}

/// Analyze a guess against a set of candidates
///
/// # Errors
///
/// Returns an error if:
/// - The guess is not a valid digit string
/// - The guess length differs from the configuration's
pub fn analyze_guess(
    guess: &str,
    config: Configuration,
    candidates: &[Code],
) -> Result<AnalysisResult, SolverError> {
    let guess = Code::parse(guess)?;
    config.check_length(&guess)?;

    let metrics = calculate_metrics(&guess, candidates);
    let n = config.code_length();

    let mut buckets: Vec<(Feedback, usize)> = feedback_distribution(&guess, candidates)
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .filter_map(|(index, count)| feedback_at(index, n).map(|feedback| (feedback, count)))
        .collect();
    buckets.sort_by_key(|&(_, count)| std::cmp::Reverse(count));

    Ok(AnalysisResult {
        guess,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: candidates.len(),
        buckets,
    })
}

/// Inverse of [`Feedback::index`]
fn feedback_at(index: usize, code_length: usize) -> Option<Feedback> {
    let strikes = u8::try_from(index / (code_length + 1)).ok()?;
    let balls = u8::try_from(index % (code_length + 1)).ok()?;
    Some(Feedback::new(strikes, balls))
}
