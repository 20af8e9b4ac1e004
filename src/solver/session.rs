//! Solving sessions
//!
//! A session owns the candidate set for one secret and moves through
//! `Searching` until the code is solved, the feedback contradicts itself, or
//! the turn budget runs out.

use super::strategy::{Selector, SelectorKind};
use crate::core::{Code, Configuration, Feedback};
use crate::error::SolverError;
use crate::space::{SpaceCache, filter_candidates};
use std::fmt;
use std::sync::Arc;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More feedback is needed
    Searching,
    /// The last guess was a full match on turn `turns`
    Solved { turns: usize },
    /// No candidate is consistent with the feedback received
    Contradiction,
    /// The turn budget ran out before the code was found
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Searching)
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Searching => write!(f, "searching"),
            Self::Solved { turns: 1 } => write!(f, "solved in 1 turn"),
            Self::Solved { turns } => write!(f, "solved in {turns} turns"),
            Self::Contradiction => write!(f, "contradiction"),
            Self::Exhausted => write!(f, "turn budget exhausted"),
        }
    }
}

/// One guess and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidates before the feedback was applied
    pub candidates_before: usize,
    /// Candidates left after filtering
    pub candidates_after: usize,
}

/// A single solving session
///
/// Coordinates generation, selection and filtering for one secret using the
/// given selector.
#[derive(Debug, Clone)]
pub struct Session<S: Selector> {
    config: Configuration,
    selector: S,
    space: Arc<[Code]>,
    candidates: Vec<Code>,
    turn: usize,
    turn_budget: Option<usize>,
    state: SessionState,
    history: Vec<Turn>,
}

impl<S: Selector> Session<S> {
    /// Start a session backed by the process-wide space cache
    pub fn new(config: Configuration, selector: S) -> Self {
        Self::with_cache(config, selector, SpaceCache::global())
    }

    /// Start a session drawing its full space from `cache`
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::Configuration;
    /// use strikeball_solver::solver::{EntropySelector, Session};
    /// use strikeball_solver::space::SpaceCache;
    ///
    /// let cache = SpaceCache::new();
    /// let config = Configuration::standard();
    /// let session = Session::with_cache(config, EntropySelector::new(config), &cache);
    ///
    /// assert_eq!(session.candidate_count(), 4536);
    /// assert!(cache.contains(config));
    /// ```
    pub fn with_cache(config: Configuration, selector: S, cache: &SpaceCache) -> Self {
        let space = cache.get(config);
        Self {
            config,
            selector,
            candidates: space.to_vec(),
            space,
            turn: 1,
            turn_budget: None,
            state: SessionState::Searching,
            history: Vec::new(),
        }
    }

    /// Limit the session to `budget` guesses
    #[must_use]
    pub fn with_turn_budget(mut self, budget: usize) -> Self {
        self.turn_budget = Some(budget);
        self
    }

    #[must_use]
    pub const fn config(&self) -> Configuration {
        self.config
    }

    #[must_use]
    pub const fn selector(&self) -> &S {
        &self.selector
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Codes still consistent with every feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// The 1-based turn the next guess will be made on
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn turn_budget(&self) -> Option<usize> {
        self.turn_budget
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Ask the selector for the next guess
    ///
    /// # Errors
    /// `SessionFinished` once the session is terminal, `NoCandidates` if the
    /// selector has nothing to offer.
    pub fn next_guess(&self) -> Result<Code, SolverError> {
        self.ensure_searching()?;
        self.selector
            .select(&self.candidates, self.turn)
            .ok_or(SolverError::NoCandidates)
    }

    /// Record the feedback `guess` received and narrow the candidates
    ///
    /// The guess does not have to come from [`Session::next_guess`]; any code
    /// of the right length is accepted.
    ///
    /// # Errors
    /// Rejects terminal sessions, guesses of the wrong length and feedback
    /// that cannot occur for this code length. State is untouched on error.
    pub fn apply_feedback(
        &mut self,
        guess: Code,
        feedback: Feedback,
    ) -> Result<SessionState, SolverError> {
        self.ensure_searching()?;
        self.config.check_length(&guess)?;
        let feedback = feedback.validate(self.config.code_length())?;

        let candidates_before = self.candidates.len();
        self.candidates = filter_candidates(&self.candidates, &guess, feedback);
        self.history.push(Turn {
            guess,
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        self.state = if feedback.is_solved(self.config.code_length()) {
            if self.candidates.is_empty() {
                SessionState::Contradiction
            } else {
                SessionState::Solved { turns: self.turn }
            }
        } else if self.candidates.is_empty() {
            SessionState::Contradiction
        } else {
            self.turn += 1;
            if self.turn_budget.is_some_and(|budget| self.turn > budget) {
                SessionState::Exhausted
            } else {
                SessionState::Searching
            }
        };

        Ok(self.state)
    }

    /// Play against a known secret until the session ends
    ///
    /// # Examples
    /// ```
    /// use strikeball_solver::core::Code;
    /// use strikeball_solver::solver::configure;
    ///
    /// let mut session = configure(4, false, false).unwrap();
    /// let secret = Code::parse("4071").unwrap();
    ///
    /// let state = session.solve(&secret).unwrap();
    /// assert!(state.is_solved());
    /// assert_eq!(session.history().last().unwrap().guess, secret);
    /// ```
    ///
    /// # Errors
    /// `CodeLengthMismatch` if the secret does not fit the configuration;
    /// otherwise as [`Session::solve_with`].
    pub fn solve(&mut self, secret: &Code) -> Result<SessionState, SolverError> {
        self.config.check_length(secret)?;
        self.solve_with(|guess| Ok(Feedback::calculate(guess, secret)))
    }

    /// Play until the session ends, asking `respond` for each guess's feedback
    ///
    /// # Errors
    /// Propagates the first error from `respond` or from the session itself.
    pub fn solve_with<F>(&mut self, mut respond: F) -> Result<SessionState, SolverError>
    where
        F: FnMut(&Code) -> Result<Feedback, SolverError>,
    {
        while self.state == SessionState::Searching {
            let guess = self.next_guess()?;
            let feedback = respond(&guess)?;
            self.apply_feedback(guess, feedback)?;
        }

        Ok(self.state)
    }

    /// Forget all feedback and start over from the full space
    pub fn reset(&mut self) {
        self.candidates = self.space.to_vec();
        self.turn = 1;
        self.state = SessionState::Searching;
        self.history.clear();
    }

    /// Take back the most recent feedback
    ///
    /// Rebuilds the candidate set by replaying the earlier turns.
    pub fn undo(&mut self) -> Option<Turn> {
        let mut history = std::mem::take(&mut self.history);
        let undone = history.pop();
        self.reset();

        for turn in history {
            // Every replayed turn was accepted while searching, so it is again
            if self.apply_feedback(turn.guess, turn.feedback).is_err() {
                break;
            }
        }

        undone
    }

    fn ensure_searching(&self) -> Result<(), SolverError> {
        if self.state.is_terminal() {
            Err(SolverError::SessionFinished(self.state))
        } else {
            Ok(())
        }
    }
}

/// Start an entropy-driven session for the given rules
///
/// # Errors
/// Returns `SolverError::InvalidConfiguration` when the rules admit no codes
/// or too many.
///
/// # Examples
/// ```
/// use strikeball_solver::solver::configure;
///
/// let session = configure(4, true, true).unwrap();
/// assert_eq!(session.candidate_count(), 10_000);
///
/// assert!(configure(0, false, false).is_err());
/// ```
pub fn configure(
    code_length: usize,
    allow_duplicates: bool,
    allow_leading_zero: bool,
) -> Result<Session<SelectorKind>, SolverError> {
    let config = Configuration::new(code_length, allow_duplicates, allow_leading_zero)?;
    Ok(Session::new(config, SelectorKind::entropy(config)))
}
