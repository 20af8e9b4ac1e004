//! Secret solving command
//!
//! Plays a session against a known secret and records the solution path.

use crate::core::{Code, Feedback};
use crate::error::SolverError;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Selector, Session, SessionState};

/// Turn limit used when none is given
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: Code,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub outcome: SessionState,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific secret with a fresh session
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not have the session's code length
/// - The selector cannot provide a guess
pub fn solve_secret<S: Selector>(
    config: SolveConfig,
    session: Session<S>,
) -> Result<SolveResult, SolverError> {
    let mut session = session.with_turn_budget(config.max_turns);
    session.config().check_length(&config.secret)?;

    let mut guesses: Vec<GuessStep> = Vec::new();

    while session.state() == SessionState::Searching {
        let candidates_before = session.candidate_count();
        let guess = session.next_guess()?;

        // Nothing to learn once a single candidate is left
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, session.candidates());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let feedback = Feedback::calculate(&guess, &config.secret);
        session.apply_feedback(guess, feedback)?;

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: session.candidate_count(),
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        outcome: session.state(),
        guesses,
        secret: config.secret,
    })
}
